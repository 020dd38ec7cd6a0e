//! LLM プロバイダ
//!
//! Chat Completions 互換エンドポイントへの単発・非ストリーミング呼び出しを扱う。
//! 構造化出力（JSON Schema 指定）に対応する。

pub mod events;
pub mod openai_compat;
pub mod provider;
pub mod schema;

pub use events::FinishReason;
pub use openai_compat::OpenAiCompatProvider;
pub use provider::{Completion, CompletionRequest, LlmProvider, Message};
pub use schema::ResponseSchema;
