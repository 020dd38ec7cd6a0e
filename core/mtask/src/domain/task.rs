//! 抽出されたタスクのドメイン型
//!
//! JSON 上のフィールド名は表のヘッダと同じ中国語名（モデルに返させる形そのまま）。

use common::error::Error;
use serde::{Deserialize, Serialize};

/// 担当者・期限が明示されていないときの値
pub const UNASSIGNED: &str = "待定";

/// タスク種別（情報 / 行動）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskCategory {
    /// 会議で共有された情報・決定事項
    #[serde(rename = "信息")]
    Info,
    /// 実行すべき行動項目
    #[serde(rename = "行动")]
    Action,
}

impl TaskCategory {
    pub const ALL: [TaskCategory; 2] = [TaskCategory::Info, TaskCategory::Action];

    /// 表示・シリアライズ時の値
    pub fn label(&self) -> &'static str {
        match self {
            Self::Info => "信息",
            Self::Action => "行动",
        }
    }
}

impl std::fmt::Display for TaskCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// 抽出された 1 項目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    #[serde(rename = "任务类型")]
    pub category: TaskCategory,
    #[serde(rename = "任务描述")]
    pub description: String,
    #[serde(rename = "负责人")]
    pub owner: String,
    #[serde(rename = "纳期")]
    pub due: String,
    #[serde(rename = "备注")]
    pub notes: String,
}

impl TaskRecord {
    /// 表の 1 行（ヘッダと同じ列順）
    pub fn cells(&self) -> [&str; 5] {
        [
            self.category.label(),
            &self.description,
            &self.owner,
            &self.due,
            &self.notes,
        ]
    }

    pub fn is_unassigned(&self) -> bool {
        self.owner.trim() == UNASSIGNED
    }
}

/// 抽出結果（モデルが返した順序を保持し、必ず 1 件以上）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionResult {
    tasks: Vec<TaskRecord>,
}

impl ExtractionResult {
    /// 空リストは Error::NoTasksExtracted
    pub fn new(tasks: Vec<TaskRecord>) -> Result<Self, Error> {
        if tasks.is_empty() {
            return Err(Error::NoTasksExtracted);
        }
        Ok(Self { tasks })
    }

    pub fn tasks(&self) -> &[TaskRecord] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// 常に false（構築時に非空を保証）
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn count_of(&self, category: TaskCategory) -> usize {
        self.tasks.iter().filter(|t| t.category == category).count()
    }
}
