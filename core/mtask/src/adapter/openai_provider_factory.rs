//! Settings から OpenAI 互換プロバイダを作る LlmProviderFactory 実装

use crate::domain::Settings;
use crate::ports::outbound::LlmProviderFactory;
use common::error::Error;
use common::llm::{LlmProvider, OpenAiCompatProvider};
use std::sync::Arc;

pub struct OpenAiProviderFactory;

impl LlmProviderFactory for OpenAiProviderFactory {
    fn create(&self, settings: &Settings) -> Result<Arc<dyn LlmProvider>, Error> {
        Ok(Arc::new(OpenAiCompatProvider::new(
            settings.model.clone(),
            settings.base_url.clone(),
            settings.api_key.clone(),
        )))
    }
}
