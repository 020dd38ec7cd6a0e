//! 時刻取得 Outbound ポート
//!
//! 「今日」「昨日」などの相対表示を固定時刻でテストできるようにする。

use chrono::{DateTime, Local};

/// 時刻取得の抽象
///
/// 実装は `common::adapter::StdClock` やテスト用の固定時刻など。
pub trait Clock: Send + Sync {
    /// 現在のローカル時刻
    fn now(&self) -> DateTime<Local>;
}
