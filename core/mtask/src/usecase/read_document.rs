//! 入力文書を 1 本の正規化済みテキストにする
//!
//! 拡張子で読み方を切り替え、結果は前後の空白を除いたうえで空でないことを保証する。

use crate::domain::DocumentKind;
use crate::ports::outbound::{DocxContent, DocxTextExtractor};
use common::error::Error;
use common::ports::outbound::FileSystem;
use std::path::Path;
use std::sync::Arc;

/// 表の行でセルをつなぐ区切り
pub const CELL_DELIMITER: &str = " | ";

const UTF8_BOM: &str = "\u{feff}";

/// 段落（文書順）→ 表（表順・行順）の順で 1 行ずつ並べる。空の段落・セル・行は出さない
pub fn docx_content_to_text(content: &DocxContent) -> String {
    let mut lines: Vec<String> = content
        .paragraphs
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .map(|p| p.to_string())
        .collect();

    for table in &content.tables {
        for row in table {
            let cells: Vec<&str> = row
                .iter()
                .map(|c| c.trim())
                .filter(|c| !c.is_empty())
                .collect();
            if !cells.is_empty() {
                lines.push(cells.join(CELL_DELIMITER));
            }
        }
    }

    lines.join("\n")
}

pub struct DocumentReader {
    fs: Arc<dyn FileSystem>,
    docx: Arc<dyn DocxTextExtractor>,
}

impl DocumentReader {
    pub fn new(fs: Arc<dyn FileSystem>, docx: Arc<dyn DocxTextExtractor>) -> Self {
        Self { fs, docx }
    }

    /// パスを読み、トリム済みの空でないテキストを返す
    pub fn read_text(&self, path: &Path) -> Result<String, Error> {
        let meta = self.fs.metadata(path)?;
        if !meta.is_file() {
            return Err(Error::NotAFile(path.to_path_buf()));
        }

        let text = match DocumentKind::from_path(path) {
            DocumentKind::PlainText => self.read_plain_text(path)?,
            DocumentKind::Docx => {
                let bytes = self.fs.read(path)?;
                docx_content_to_text(&self.docx.extract(&bytes)?)
            }
            DocumentKind::LegacyDoc => return Err(Error::LegacyDoc(path.to_path_buf())),
            DocumentKind::Unsupported(extension) => {
                return Err(Error::UnsupportedFormat {
                    extension: format!(".{}", extension),
                })
            }
        };

        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(Error::EmptyContent(path.to_path_buf()));
        }
        Ok(trimmed.to_string())
    }

    fn read_plain_text(&self, path: &Path) -> Result<String, Error> {
        let bytes = self.fs.read(path)?;
        let text = String::from_utf8(bytes).map_err(|_| Error::Encoding(path.to_path_buf()))?;
        Ok(match text.strip_prefix(UTF8_BOM) {
            Some(rest) => rest.to_string(),
            None => text,
        })
    }
}
