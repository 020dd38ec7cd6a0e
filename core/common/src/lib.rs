//! mtask 共通ライブラリ
//!
//! エラー型・ドメイン Newtype・Outbound ポート（FS / 時刻 / ログ）とその標準実装、
//! OpenAI 互換 LLM プロバイダを提供します。

/// エラーハンドリング
pub mod error;

/// ドメイン型（Newtype）
pub mod domain;

/// Outbound ポート
pub mod ports;

/// ポートの標準実装
pub mod adapter;

/// LLMプロバイダ
pub mod llm;
