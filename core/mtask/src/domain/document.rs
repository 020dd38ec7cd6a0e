//! 入力文書の種別（拡張子で判定）

use std::path::Path;

/// 一覧・選択の対象とする拡張子
pub const DISCOVERABLE_EXTENSIONS: [&str; 4] = ["md", "txt", "docx", "doc"];

/// 拡張子から決まる読み方
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentKind {
    /// .md / .txt / 拡張子なし（UTF-8 テキスト）
    PlainText,
    /// Word Open XML
    Docx,
    /// 旧形式 Word。読まずに変換を促す
    LegacyDoc,
    /// それ以外（小文字化した拡張子）
    Unsupported(String),
}

impl DocumentKind {
    pub fn from_path(path: &Path) -> Self {
        let ext = match path.extension() {
            None => return Self::PlainText,
            Some(ext) => ext.to_string_lossy().to_lowercase(),
        };
        match ext.as_str() {
            "md" | "txt" => Self::PlainText,
            "docx" => Self::Docx,
            "doc" => Self::LegacyDoc,
            _ => Self::Unsupported(ext),
        }
    }
}

/// 一覧対象の拡張子か（大文字小文字を区別しない）
pub fn is_discoverable(path: &Path) -> bool {
    path.extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .map(|e| DISCOVERABLE_EXTENSIONS.contains(&e.as_str()))
        .unwrap_or(false)
}
