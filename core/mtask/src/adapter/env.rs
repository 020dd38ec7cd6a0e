//! 実行環境の場所（adapter 層）
//!
//! usecase は実行ファイルの位置を直接調べず、ここで解決した値を受け取る。

use std::env;
use std::path::PathBuf;

/// 実行ファイルのあるディレクトリ。取れないときはカレントディレクトリ
pub fn exe_dir() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|d| d.to_path_buf()))
        .or_else(|| env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// ログファイルのパスを環境変数 MTASK_LOG_FILE から取得
pub fn log_file_from_env() -> Option<PathBuf> {
    env::var("MTASK_LOG_FILE")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .map(PathBuf::from)
}
