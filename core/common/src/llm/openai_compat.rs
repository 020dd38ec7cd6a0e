//! OpenAI Chat Completions 互換 (/chat/completions) プロバイダ
//!
//! base_url で任意のエンドポイント（Ark 等）を指定可能。構造化出力は response_format で要求する。

use crate::domain::{ApiKey, BaseUrl, ModelName};
use crate::error::Error;
use crate::llm::events::FinishReason;
use crate::llm::provider::{Completion, CompletionRequest, LlmProvider};
use reqwest::StatusCode;
use serde_json::{json, Value};

/// OpenAI Chat Completions 互換プロバイダ
pub struct OpenAiCompatProvider {
    model: ModelName,
    base_url: BaseUrl,
    api_key: ApiKey,
}

impl OpenAiCompatProvider {
    /// 新しいプロバイダを作成（`api_key` は Bearer 認証に使う）
    pub fn new(model: ModelName, base_url: BaseUrl, api_key: ApiKey) -> Self {
        Self {
            model,
            base_url,
            api_key,
        }
    }

    fn url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    fn auth_header(&self) -> String {
        format!("Bearer {}", self.api_key.expose())
    }
}

/// 非 2xx 応答からエラーメッセージを組み立てる（error.message があればそれを使う）
fn http_error_message(status: StatusCode, response_text: &str) -> String {
    let detail = serde_json::from_str::<Value>(response_text)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(|s| s.to_string()))
        .unwrap_or_else(|| response_text.to_string());
    format!("Chat completions error: HTTP {}: {}", status, detail)
}

impl LlmProvider for OpenAiCompatProvider {
    fn name(&self) -> &str {
        "openai_compat"
    }

    fn make_request_payload(&self, request: &CompletionRequest) -> Result<Value, Error> {
        let messages: Vec<Value> = request
            .messages
            .iter()
            .map(|m| json!({ "role": m.role, "content": m.content }))
            .collect();

        let mut payload = json!({
            "model": self.model.as_ref(),
            "messages": messages,
            "stream": false
        });

        // 指定が無ければサーバ側の既定値に任せる
        if let Some(temperature) = request.temperature {
            payload["temperature"] = json!(f64::from(temperature));
        }
        if let Some(max_tokens) = request.max_tokens {
            payload["max_tokens"] = json!(max_tokens);
        }
        if let Some(ref schema) = request.response_schema {
            payload["response_format"] = schema.to_response_format();
        }

        Ok(payload)
    }

    fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
        let response = reqwest::blocking::Client::new()
            .post(self.url())
            .header("Content-Type", "application/json")
            .header("Authorization", self.auth_header())
            .body(request_json.to_string())
            .send()
            .map_err(|e| Error::http(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let response_text = response
            .text()
            .map_err(|e| Error::http(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(Error::http(http_error_message(status, &response_text)));
        }

        Ok(response_text)
    }

    fn parse_completion(&self, response_json: &str) -> Result<Completion, Error> {
        let v: Value = serde_json::from_str(response_json)
            .map_err(|e| Error::json(format!("Failed to parse response JSON: {}", e)))?;

        if let Some(err) = v.get("error") {
            let msg = err["message"].as_str().unwrap_or("Unknown error");
            return Err(Error::http(format!("API error: {}", msg)));
        }

        let choice = &v["choices"][0];
        if choice.is_null() {
            return Err(Error::json("Response has no choices"));
        }

        // content は文字列のほか、content parts 配列で返す互換実装もある
        let text = match &choice["message"]["content"] {
            Value::String(s) => Some(s.clone()),
            Value::Array(parts) => {
                let joined: String = parts
                    .iter()
                    .filter_map(|p| p["text"].as_str())
                    .collect();
                Some(joined)
            }
            _ => None,
        };

        Ok(Completion {
            text,
            finish: FinishReason::from_openai(choice["finish_reason"].as_str()),
        })
    }
}
