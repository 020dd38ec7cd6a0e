//! 会議記録から情報・行動項目を抽出する
//!
//! 固定の system / user プロンプトと JSON Schema で 1 回だけ呼び出し、
//! 結果が 1 件以上あることを事後条件として検査する。リトライはしない。

use crate::domain::task::UNASSIGNED;
use crate::domain::{ExtractionResult, TaskCategory, TaskRecord};
use common::error::Error;
use common::llm::{CompletionRequest, FinishReason, LlmProvider, Message, ResponseSchema};
use common::ports::outbound::{Log, LogLevel, LogRecord};
use regex::Regex;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

pub const MAX_TOKENS: u32 = 2000;
pub const TEMPERATURE: f32 = 0.1;
pub const SCHEMA_NAME: &str = "meeting_response";

pub const SYSTEM_PROMPT: &str = "你是一个专业的会议纪要分析助手。请仔细分析会议记录内容，提取出所有相关的信息和待办事项。

请将内容分为两种类型：
- 信息：会议中提及的重要内容、决定、讨论结果等信息性内容
- 行动：明确的待办事项、需要执行的任务、后续跟进事项等

对于每项内容，请确定：
- 任务类型：选择\"信息\"或\"行动\"
- 任务描述：清晰描述具体内容
- 负责人：相关的责任人姓名，如果没有明确负责人可填\"待定\"
- 纳期：截止时间或相关时间节点，格式为YYYY-MM-DD，如果没有明确日期请标注\"待定\"
- 备注：补充说明、依赖关系或注意事项，没有则留空

请从会议记录中提取所有可识别的信息和行动项。";

/// 認証エラーとみなすキーワード（小文字で比較）
const AUTH_KEYWORDS: [&str; 6] = [
    "api_key",
    "api key",
    "apikey",
    "unauthorized",
    "401",
    "authentication",
];

pub fn user_prompt(meeting_text: &str) -> String {
    format!(
        "请分析以下会议记录，提取其中的信息和行动项：\n\n{}",
        meeting_text
    )
}

/// ExtractionResult の JSON Schema（キー名は表のヘッダと同じ）
pub fn extraction_schema() -> Value {
    let categories: Vec<&str> = TaskCategory::ALL.iter().map(|c| c.label()).collect();
    json!({
        "type": "object",
        "properties": {
            "tasks": {
                "type": "array",
                "description": "从会议记录中提取的任务列表",
                "items": {
                    "type": "object",
                    "properties": {
                        "任务类型": {
                            "type": "string",
                            "enum": categories,
                            "description": "任务的分类类型：信息（会议中提及的内容）或行动（待办事项）"
                        },
                        "任务描述": { "type": "string", "description": "任务的具体描述和要求" },
                        "负责人": {
                            "type": "string",
                            "description": format!("负责执行该任务的人员姓名，未明确时为\"{}\"", UNASSIGNED)
                        },
                        "纳期": {
                            "type": "string",
                            "description": format!("任务的截止日期，格式为YYYY-MM-DD，未明确时为\"{}\"", UNASSIGNED)
                        },
                        "备注": { "type": "string", "description": "任务的补充说明或注意事项" }
                    },
                    "required": ["任务类型", "任务描述", "负责人", "纳期", "备注"],
                    "additionalProperties": false
                }
            }
        },
        "required": ["tasks"],
        "additionalProperties": false
    })
}

pub fn build_request(meeting_text: &str) -> CompletionRequest {
    CompletionRequest {
        messages: vec![
            Message::system(SYSTEM_PROMPT),
            Message::user(user_prompt(meeting_text)),
        ],
        response_schema: Some(ResponseSchema::strict(SCHEMA_NAME, extraction_schema())),
        max_tokens: Some(MAX_TOKENS),
        temperature: Some(TEMPERATURE),
    }
}

/// プロバイダ由来のエラーを 認証 / モデル / その他 に分類し直す
pub fn classify_provider_error(err: Error) -> Error {
    let message = err.to_string();
    let lower = message.to_lowercase();
    if AUTH_KEYWORDS.iter().any(|k| lower.contains(k)) {
        Error::Auth(message)
    } else if lower.contains("model") {
        Error::Model(message)
    } else {
        Error::Llm(message)
    }
}

#[derive(Debug, Deserialize)]
struct ExtractionResponse {
    tasks: Vec<TaskRecord>,
}

/// ```json ... ``` で囲まれて返ってきた場合は中身だけを取り出す
fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    match Regex::new(r"(?s)^```[A-Za-z]*\s*(.*?)\s*```$") {
        Ok(re) => re
            .captures(trimmed)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str())
            .unwrap_or(trimmed),
        Err(_) => trimmed,
    }
}

/// 応答本文を ExtractionResult にする（空リストは NoTasksExtracted）
pub fn parse_extraction(content: &str) -> Result<ExtractionResult, Error> {
    let body = strip_code_fence(content);
    let response: ExtractionResponse = serde_json::from_str(body)
        .map_err(|e| Error::Llm(format!("响应不符合任务列表结构: {}", e)))?;
    ExtractionResult::new(response.tasks)
}

pub struct TaskExtractor {
    log: Arc<dyn Log>,
}

impl TaskExtractor {
    pub fn new(log: Arc<dyn Log>) -> Self {
        Self { log }
    }

    /// 1 回だけ呼び出して抽出する（ストリーミング・リトライなし）
    pub fn extract(
        &self,
        provider: &dyn LlmProvider,
        meeting_text: &str,
    ) -> Result<ExtractionResult, Error> {
        let request = build_request(meeting_text);
        let _ = self.log.log(
            &LogRecord::new(LogLevel::Debug, "usecase", "llm", "completion request")
                .field("provider", provider.name())
                .field("input_chars", meeting_text.chars().count())
                .field("max_tokens", MAX_TOKENS),
        );

        let completion = provider
            .complete(&request)
            .map_err(classify_provider_error)?;

        let _ = self.log.log(
            &LogRecord::new(LogLevel::Debug, "usecase", "llm", "completion response")
                .field("finish", format!("{:?}", completion.finish))
                .field(
                    "content_chars",
                    completion.text.as_deref().map(|t| t.chars().count()).unwrap_or(0),
                ),
        );

        if completion.finish == FinishReason::Length {
            return Err(Error::Truncated {
                max_tokens: MAX_TOKENS,
            });
        }

        let content = completion
            .text
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| Error::Llm("模型未返回内容".to_string()))?;
        parse_extraction(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::adapter::NoopLog;
    use common::llm::Completion;

    /// 固定の Completion（またはエラー）を返すプロバイダ
    struct CannedProvider {
        result: std::sync::Mutex<Option<Result<Completion, Error>>>,
        seen: std::sync::Mutex<Vec<CompletionRequest>>,
    }

    impl CannedProvider {
        fn ok(text: &str, finish: FinishReason) -> Self {
            Self {
                result: std::sync::Mutex::new(Some(Ok(Completion {
                    text: Some(text.to_string()),
                    finish,
                }))),
                seen: std::sync::Mutex::new(Vec::new()),
            }
        }

        fn err(err: Error) -> Self {
            Self {
                result: std::sync::Mutex::new(Some(Err(err))),
                seen: std::sync::Mutex::new(Vec::new()),
            }
        }
    }

    impl LlmProvider for CannedProvider {
        fn name(&self) -> &str {
            "canned"
        }

        fn make_request_payload(&self, _request: &CompletionRequest) -> Result<Value, Error> {
            Ok(json!({}))
        }

        fn make_http_request(&self, _request_json: &str) -> Result<String, Error> {
            Ok(String::new())
        }

        fn parse_completion(&self, _response_json: &str) -> Result<Completion, Error> {
            unreachable!("complete is overridden")
        }

        fn complete(&self, request: &CompletionRequest) -> Result<Completion, Error> {
            self.seen.lock().unwrap().push(request.clone());
            self.result.lock().unwrap().take().expect("called once")
        }
    }

    fn extractor() -> TaskExtractor {
        TaskExtractor::new(Arc::new(NoopLog))
    }

    const ONE_ACTION: &str = r#"{"tasks":[{"任务类型":"行动","任务描述":"完成报告","负责人":"老王","纳期":"2024-01-01","备注":""}]}"#;

    #[test]
    fn test_request_shape() {
        let req = build_request("周会：老王负责完成报告，截止到2024-01-01");
        assert_eq!(req.messages.len(), 2);
        assert_eq!(req.messages[0].role, "system");
        assert!(req.messages[0].content.contains("待定"));
        assert_eq!(req.messages[1].role, "user");
        assert!(req.messages[1]
            .content
            .ends_with("周会：老王负责完成报告，截止到2024-01-01"));
        assert_eq!(req.max_tokens, Some(2000));
        assert_eq!(req.temperature, Some(0.1));
        let schema = req.response_schema.unwrap();
        assert_eq!(schema.name, "meeting_response");
        let items = &schema.schema["properties"]["tasks"]["items"];
        assert_eq!(items["properties"]["任务类型"]["enum"], json!(["信息", "行动"]));
        assert_eq!(items["required"].as_array().unwrap().len(), 5);
    }

    #[test]
    fn test_extract_one_action() {
        let provider = CannedProvider::ok(ONE_ACTION, FinishReason::Stop);
        let result = extractor()
            .extract(&provider, "周会：老王负责完成报告，截止到2024-01-01")
            .unwrap();
        assert_eq!(result.len(), 1);
        let t = &result.tasks()[0];
        assert_eq!(t.category, TaskCategory::Action);
        assert_eq!(t.owner, "老王");
        assert_eq!(t.due, "2024-01-01");
        assert_eq!(provider.seen.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_extract_empty_list_fails() {
        let provider = CannedProvider::ok(r#"{"tasks":[]}"#, FinishReason::Stop);
        let err = extractor().extract(&provider, "x").unwrap_err();
        assert!(matches!(err, Error::NoTasksExtracted));
    }

    #[test]
    fn test_extract_truncated_fails() {
        let provider = CannedProvider::ok(r#"{"tasks":[{"任务类型":"#, FinishReason::Length);
        let err = extractor().extract(&provider, "x").unwrap_err();
        assert!(matches!(err, Error::Truncated { max_tokens: 2000 }));
    }

    #[test]
    fn test_extract_fenced_json() {
        let fenced = format!("```json\n{}\n```", ONE_ACTION);
        let provider = CannedProvider::ok(&fenced, FinishReason::Stop);
        assert_eq!(extractor().extract(&provider, "x").unwrap().len(), 1);
    }

    #[test]
    fn test_extract_invalid_category_fails() {
        let body = r#"{"tasks":[{"任务类型":"其他","任务描述":"a","负责人":"b","纳期":"c","备注":""}]}"#;
        let provider = CannedProvider::ok(body, FinishReason::Stop);
        let err = extractor().extract(&provider, "x").unwrap_err();
        assert!(matches!(err, Error::Llm(_)));
    }

    #[test]
    fn test_extract_blank_content_fails() {
        let provider = CannedProvider::ok("  ", FinishReason::Stop);
        let err = extractor().extract(&provider, "x").unwrap_err();
        assert!(matches!(err, Error::Llm(_)));
    }

    #[test]
    fn test_classify_auth() {
        let err = classify_provider_error(Error::http(
            "Chat completions error: HTTP 401 Unauthorized: bad token",
        ));
        assert!(matches!(err, Error::Auth(_)));
        let err = classify_provider_error(Error::http("API error: invalid API key provided"));
        assert!(matches!(err, Error::Auth(_)));
    }

    #[test]
    fn test_classify_model() {
        let err = classify_provider_error(Error::http(
            "Chat completions error: HTTP 404 Not Found: The model doubao-x does not exist",
        ));
        match err {
            Error::Model(msg) => assert!(msg.contains("doubao-x")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_classify_generic() {
        let provider =
            CannedProvider::err(Error::http("HTTP request failed: connection refused"));
        let err = extractor().extract(&provider, "x").unwrap_err();
        match err {
            Error::Llm(msg) => assert!(msg.contains("connection refused")),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
