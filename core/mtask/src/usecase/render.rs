//! 抽出結果を表レイアウトに変換し、SpreadsheetWriter で保存する

use crate::domain::sheet::{column_width, HEADERS, SHEET_TITLE};
use crate::domain::{ExtractionResult, SheetLayout};
use crate::ports::outbound::SpreadsheetWriter;
use common::error::Error;
use std::path::Path;
use std::sync::Arc;

/// ヘッダ + 1 タスク 1 行。列幅はヘッダを含む各列の最大文字数から決める
pub fn build_layout(result: &ExtractionResult) -> SheetLayout {
    let rows: Vec<Vec<String>> = result
        .tasks()
        .iter()
        .map(|t| t.cells().iter().map(|c| c.to_string()).collect())
        .collect();

    let widths = (0..HEADERS.len())
        .map(|col| {
            let longest = std::iter::once(HEADERS[col])
                .chain(rows.iter().map(|r| r[col].as_str()))
                .map(|s| s.chars().count())
                .max()
                .unwrap_or(0);
            column_width(longest)
        })
        .collect();

    SheetLayout {
        title: SHEET_TITLE.to_string(),
        headers: HEADERS.iter().map(|h| h.to_string()).collect(),
        rows,
        widths,
    }
}

pub struct SpreadsheetRenderer {
    writer: Arc<dyn SpreadsheetWriter>,
}

impl SpreadsheetRenderer {
    pub fn new(writer: Arc<dyn SpreadsheetWriter>) -> Self {
        Self { writer }
    }

    /// 失敗はすべて Error::Render に包む（途中まで書かれたファイルは残り得る）
    pub fn render(&self, result: &ExtractionResult, output: &Path) -> Result<(), Error> {
        let layout = build_layout(result);
        self.writer.write(&layout, output).map_err(|e| match e {
            Error::Render(_) => e,
            other => Error::render(other.to_string()),
        })
    }
}
