//! Word (.docx) から段落と表のテキストを取り出す Outbound ポート

use common::error::Error;

/// 文書順に並んだ本文段落と表（表 → 行 → セル）
///
/// 空の段落・セルも含めた生の内容。捨てるかどうかは usecase が決める。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocxContent {
    pub paragraphs: Vec<String>,
    pub tables: Vec<Vec<Vec<String>>>,
}

pub trait DocxTextExtractor: Send + Sync {
    /// 壊れた文書・zip でないものは Error::Docx
    fn extract(&self, bytes: &[u8]) -> Result<DocxContent, Error>;
}
