//! 人間向けログ（-v 指定時に stderr へ要点のみ 1 行で出力）
//!
//! fields の全量は出さず、長い値は切り詰める（巨大化防止）。

use crate::error::Error;
use crate::ports::outbound::{Log, LogLevel, LogRecord};

const FIELD_SUMMARY_MAX: usize = 200;

fn summarize(value: &serde_json::Value) -> String {
    let s = match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    if s.chars().count() <= FIELD_SUMMARY_MAX {
        return s;
    }
    let truncated: String = s.chars().take(FIELD_SUMMARY_MAX).collect();
    format!("{}... (len={})", truncated, s.chars().count())
}

/// LogRecord を 1 行に整形する
pub fn format_line(record: &LogRecord) -> String {
    let mut line = format!("[{}] {}", record.level.as_str(), record.message);
    if let Some(ref kind) = record.kind {
        line.push_str(&format!(" kind={}", kind));
    }
    if let Some(ref fields) = record.fields {
        for (k, v) in fields {
            line.push_str(&format!(" {}={}", k, summarize(v)));
        }
    }
    line
}

/// stderr へ整形して出す Log 実装。`min_level` より詳細なレコードは捨てる
pub struct StderrLog {
    min_level: LogLevel,
}

impl StderrLog {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }

    fn enabled(&self, level: LogLevel) -> bool {
        rank(level) <= rank(self.min_level)
    }
}

impl Default for StderrLog {
    fn default() -> Self {
        Self::new(LogLevel::Debug)
    }
}

fn rank(level: LogLevel) -> u8 {
    match level {
        LogLevel::Error => 0,
        LogLevel::Warn => 1,
        LogLevel::Info => 2,
        LogLevel::Debug => 3,
    }
}

impl Log for StderrLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        if self.enabled(record.level) {
            eprintln!("{}", format_line(record));
        }
        Ok(())
    }
}
