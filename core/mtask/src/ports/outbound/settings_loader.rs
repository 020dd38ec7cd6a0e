//! 接続設定を解決する Outbound ポート

use crate::domain::Settings;
use common::error::Error;

/// .env / 環境変数から Settings を組み立てる能力
///
/// usecase は環境変数に直接触れず、この trait 経由で 1 回だけ設定を得る。
pub trait SettingsLoader: Send + Sync {
    /// ARK_API_KEY が無ければ Error::ConfigMissing
    fn load(&self) -> Result<Settings, Error>;
}
