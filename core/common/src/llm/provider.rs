//! LLMプロバイダのトレイト定義

use crate::error::Error;
use crate::llm::events::FinishReason;
use crate::llm::schema::ResponseSchema;
use serde_json::Value;

/// メッセージ（system / user / assistant）
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new("system", content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new("user", content)
    }
}

/// 単発の完了リクエスト
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub messages: Vec<Message>,
    /// 指定時は構造化出力（JSON Schema）を要求する
    pub response_schema: Option<ResponseSchema>,
    pub max_tokens: Option<u32>,
    /// None のときはプロバイダ既定値
    pub temperature: Option<f32>,
}

/// 単発の完了結果
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    /// choices[0].message.content（無ければ None）
    pub text: Option<String>,
    pub finish: FinishReason,
}

/// LLMプロバイダのトレイト
///
/// ペイロード生成・HTTP 実行・応答解釈を分け、ネットワーク無しで前後をテストできるようにする。
pub trait LlmProvider: Send + Sync {
    /// プロバイダ名を返す
    fn name(&self) -> &str;

    /// リクエストペイロードを生成
    fn make_request_payload(&self, request: &CompletionRequest) -> Result<Value, Error>;

    /// HTTPリクエストを実行してレスポンスJSON文字列を取得
    ///
    /// 非 2xx は `Error::Http`（メッセージに HTTP ステータスとプロバイダのエラーメッセージを含む）。
    fn make_http_request(&self, request_json: &str) -> Result<String, Error>;

    /// レスポンスから本文と終了理由を抽出
    fn parse_completion(&self, response_json: &str) -> Result<Completion, Error>;

    /// 生成・送信・解釈を一度に行う（単発、リトライなし）
    fn complete(&self, request: &CompletionRequest) -> Result<Completion, Error> {
        let payload = self.make_request_payload(request)?;
        let body = serde_json::to_string(&payload)
            .map_err(|e| Error::json(format!("Failed to serialize request: {}", e)))?;
        let response = self.make_http_request(&body)?;
        self.parse_completion(&response)
    }
}
