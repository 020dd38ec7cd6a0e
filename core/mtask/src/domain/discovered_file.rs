//! 入力候補ファイル（ディレクトリ走査ごとに作り直し、選択後は破棄）

use chrono::{DateTime, Local};
use std::path::PathBuf;

/// 走査で見つかった候補ファイル
#[derive(Debug, Clone, PartialEq)]
pub struct DiscoveredFile {
    pub path: PathBuf,
    pub name: String,
    pub size: u64,
    pub size_display: String,
    pub modified: DateTime<Local>,
    pub modified_display: String,
}

/// ピッカーの結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome {
    Selected(PathBuf),
    /// q / quit / 退出（正常終了扱い）
    Quit,
}

/// バイト数を読みやすい文字列にする（B / KB / MB）
pub fn format_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = 1024.0 * 1024.0;
    let b = bytes as f64;
    if b < KB {
        format!("{} B", bytes)
    } else if b < MB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{:.1} MB", b / MB)
    }
}

/// 更新時刻を `now` からの相対表示にする
///
/// 同日: 今天 HH:MM / 前日: 昨天 HH:MM / 2〜7 日前: n天前 / それ以外: YYYY-MM-DD
pub fn format_relative(modified: DateTime<Local>, now: DateTime<Local>) -> String {
    let days = (now.date_naive() - modified.date_naive()).num_days();
    match days {
        0 => format!("今天 {}", modified.format("%H:%M")),
        1 => format!("昨天 {}", modified.format("%H:%M")),
        2..=7 => format!("{}天前", days),
        _ => modified.format("%Y-%m-%d").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(10), "10 B");
        assert_eq!(format_size(1023), "1023 B");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.0 MB");
    }

    #[test]
    fn test_format_relative_today_and_yesterday() {
        let now = at(2024, 3, 10, 18, 0);
        assert_eq!(format_relative(at(2024, 3, 10, 9, 5), now), "今天 09:05");
        assert_eq!(format_relative(at(2024, 3, 9, 23, 59), now), "昨天 23:59");
    }

    #[test]
    fn test_format_relative_days_and_absolute() {
        let now = at(2024, 3, 10, 18, 0);
        assert_eq!(format_relative(at(2024, 3, 8, 12, 0), now), "2天前");
        assert_eq!(format_relative(at(2024, 3, 3, 12, 0), now), "7天前");
        assert_eq!(format_relative(at(2024, 3, 2, 12, 0), now), "2024-03-02");
    }

    #[test]
    fn test_format_relative_future_is_absolute() {
        let now = at(2024, 3, 10, 18, 0);
        assert_eq!(format_relative(at(2024, 3, 12, 8, 0), now), "2024-03-12");
    }
}
