//! 設定から LLM プロバイダを生成する Outbound ポート

use crate::domain::Settings;
use common::error::Error;
use common::llm::LlmProvider;
use std::sync::Arc;

/// Settings を受け取ってプロバイダを組み立てる
///
/// 設定はパイプライン途中で解決されるため、プロバイダそのものではなく生成手段を注入する。
pub trait LlmProviderFactory: Send + Sync {
    fn create(&self, settings: &Settings) -> Result<Arc<dyn LlmProvider>, Error>;
}
