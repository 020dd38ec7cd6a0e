//! 出力する表のレイアウト（スタイル適用前の純粋な表現）

/// シート名
pub const SHEET_TITLE: &str = "会议信息行动清单";

/// ヘッダ（列順固定）
pub const HEADERS: [&str; 5] = ["任务类型", "任务描述", "负责人", "纳期", "备注"];

pub const MIN_COLUMN_WIDTH: usize = 10;
pub const MAX_COLUMN_WIDTH: usize = 50;

/// 列幅 = clamp(最長の文字数 + 2, 10, 50)
pub fn column_width(max_chars: usize) -> f64 {
    (max_chars + 2).clamp(MIN_COLUMN_WIDTH, MAX_COLUMN_WIDTH) as f64
}

/// 1 シート分のレイアウト
#[derive(Debug, Clone, PartialEq)]
pub struct SheetLayout {
    pub title: String,
    pub headers: Vec<String>,
    /// データ行（各行 HEADERS.len() 個）
    pub rows: Vec<Vec<String>>,
    /// 列幅（HEADERS.len() 個）
    pub widths: Vec<f64>,
}

impl SheetLayout {
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_width_bounds() {
        assert_eq!(column_width(0), 10.0);
        assert_eq!(column_width(8), 10.0);
        assert_eq!(column_width(9), 11.0);
        assert_eq!(column_width(48), 50.0);
        assert_eq!(column_width(10_000), 50.0);
    }
}
