//! rust_xlsxwriter で SheetLayout を .xlsx に書き出す SpreadsheetWriter 実装

use crate::domain::SheetLayout;
use crate::ports::outbound::SpreadsheetWriter;
use common::error::Error;
use common::ports::outbound::FileSystem;
use rust_xlsxwriter::{
    Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, XlsxError,
};
use std::path::Path;
use std::sync::Arc;

const HEADER_FILL: u32 = 0x366092;

fn header_format() -> Format {
    Format::new()
        .set_bold()
        .set_font_color(Color::White)
        .set_pattern(FormatPattern::Solid)
        .set_background_color(Color::RGB(HEADER_FILL))
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Thin)
}

fn data_format() -> Format {
    Format::new()
        .set_align(FormatAlign::Left)
        .set_align(FormatAlign::Top)
        .set_text_wrap()
        .set_border(FormatBorder::Thin)
}

fn xlsx_error(e: XlsxError) -> Error {
    Error::render(e.to_string())
}

/// ブックをメモリ上で組み立て、FileSystem 経由で一度に保存する
pub struct XlsxSpreadsheetWriter {
    fs: Arc<dyn FileSystem>,
}

impl XlsxSpreadsheetWriter {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }
}

/// レイアウトを xlsx のバイト列にする
pub fn layout_to_xlsx(layout: &SheetLayout) -> Result<Vec<u8>, Error> {
    if layout.widths.len() != layout.column_count() {
        return Err(Error::render(format!(
            "列宽数量({})与列数({})不一致",
            layout.widths.len(),
            layout.column_count()
        )));
    }
    let header = header_format();
    let data = data_format();

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(&layout.title).map_err(xlsx_error)?;
    sheet.set_screen_gridlines(false);

    for (col, text) in layout.headers.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, text, &header)
            .map_err(xlsx_error)?;
    }
    for (i, row) in layout.rows.iter().enumerate() {
        let row_index = (i + 1) as u32;
        for (col, text) in row.iter().enumerate() {
            sheet
                .write_string_with_format(row_index, col as u16, text, &data)
                .map_err(xlsx_error)?;
        }
    }
    for (col, width) in layout.widths.iter().enumerate() {
        sheet
            .set_column_width(col as u16, *width)
            .map_err(xlsx_error)?;
    }

    workbook.save_to_buffer().map_err(xlsx_error)
}

impl SpreadsheetWriter for XlsxSpreadsheetWriter {
    fn write(&self, layout: &SheetLayout, path: &Path) -> Result<(), Error> {
        let bytes = layout_to_xlsx(layout)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.fs.create_dir_all(parent)?;
        }
        self.fs.write(path, &bytes)
    }
}
