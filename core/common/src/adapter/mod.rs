//! アダプター（Outbound ポートの標準実装）
//!
//! usecase は ports の trait 経由でのみファイル・時刻・ログに触れる。
//! ここの Std* を wiring で注入し、テストではモックを注入する。

pub mod file_json_log;
pub mod std_clock;
pub mod std_fs;
pub mod stderr_log;

pub use crate::ports::outbound::{Clock, FileMetadata, FileSystem, Log};
pub use file_json_log::{FileJsonLog, NoopLog};
pub use std_clock::StdClock;
pub use std_fs::StdFileSystem;
pub use stderr_log::StderrLog;
