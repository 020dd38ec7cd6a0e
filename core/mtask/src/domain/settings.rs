//! API 接続設定（起動時に 1 回解決し、以後は不変）

use common::domain::{ApiKey, BaseUrl, ModelName};
use common::error::Error;
use std::path::Path;

pub const ENV_API_KEY: &str = "ARK_API_KEY";
pub const ENV_MODEL_ID: &str = "MODEL_ID";
pub const ENV_BASE_URL: &str = "BASE_URL";

pub const DEFAULT_MODEL_ID: &str = "doubao-seed-1.6-250615";
pub const DEFAULT_BASE_URL: &str = "https://ark.cn-beijing.volces.com/api/v3";

/// 解決済みの接続設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_key: ApiKey,
    pub model: ModelName,
    pub base_url: BaseUrl,
}

impl Settings {
    /// キー → 値の検索関数から設定を組み立てる。
    ///
    /// ARK_API_KEY が無い（空文字含む）場合は `expected_location` を示して ConfigMissing。
    pub fn from_lookup<F>(lookup: F, expected_location: &Path) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = non_empty(ENV_API_KEY).ok_or_else(|| Error::ConfigMissing {
            location: expected_location.to_path_buf(),
        })?;
        let model = non_empty(ENV_MODEL_ID).unwrap_or_else(|| DEFAULT_MODEL_ID.to_string());
        let base_url = non_empty(ENV_BASE_URL).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            api_key: ApiKey::new(api_key.trim()),
            model: ModelName::new(model.trim()),
            base_url: BaseUrl::new(base_url),
        })
    }
}
