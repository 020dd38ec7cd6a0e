//! パイプラインの進捗を表示する Outbound ポート

use crate::domain::PipelineEvent;

pub trait ProgressReporter: Send + Sync {
    fn report(&self, event: &PipelineEvent);
}
