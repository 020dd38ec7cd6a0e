//! 応答の終了理由
//!
//! プロバイダごとの文字列表現をここで正規化する。

use serde::{Deserialize, Serialize};

/// 生成終了理由
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FinishReason {
    /// 通常終了
    Stop,
    /// 長さ制限（max_tokens 到達）
    Length,
    /// その他（プロバイダ固有）
    Other(String),
}

impl FinishReason {
    /// OpenAI 互換の finish_reason 文字列から変換する（None は Stop 扱い）
    pub fn from_openai(s: Option<&str>) -> Self {
        match s {
            None | Some("stop") => Self::Stop,
            Some("length") => Self::Length,
            Some(other) => Self::Other(other.to_string()),
        }
    }
}
