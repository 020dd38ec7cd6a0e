//! Ports & Adapters のポート定義
//!
//! - inbound: ドライバ（CLI）がアプリを呼び出すインターフェース
//! - outbound: アプリが外界（設定・LLM・Word・表計算・対話入力・進捗表示）を使うための trait

pub mod inbound;
pub mod outbound;
