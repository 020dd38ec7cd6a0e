//! 進捗を標準出力に 1 行ずつ表示する ProgressReporter 実装

use crate::domain::PipelineEvent;
use crate::ports::outbound::ProgressReporter;

/// イベントに対応する表示行
pub fn progress_lines(event: &PipelineEvent) -> Vec<String> {
    match event {
        PipelineEvent::LoadingConfig => vec!["📋 加载配置...".to_string()],
        PipelineEvent::ConfigLoaded => vec!["✅ 配置加载成功".to_string()],
        PipelineEvent::ReadingInput { path } => {
            vec![format!("📖 读取会议记录: {}", path.display())]
        }
        PipelineEvent::InputRead { chars } => {
            vec![format!("✅ 读取成功，文本长度: {} 字符", chars)]
        }
        PipelineEvent::Extracting => vec![
            "🤖 调用AI分析会议内容，提取信息和行动项...".to_string(),
            "   (这可能需要几秒钟时间)".to_string(),
        ],
        PipelineEvent::Extracted { count } => {
            vec![format!("✅ 信息和行动项提取成功，共识别 {} 项", count)]
        }
        PipelineEvent::Rendering => vec!["📊 生成Excel文件...".to_string()],
        PipelineEvent::Rendered { .. } => vec!["✅ 处理完成!".to_string()],
    }
}

pub struct ConsoleProgress;

impl ProgressReporter for ConsoleProgress {
    fn report(&self, event: &PipelineEvent) {
        for line in progress_lines(event) {
            println!("{}", line);
        }
    }
}
