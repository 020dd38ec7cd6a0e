//! パイプラインの進捗イベント（表示は adapter の責務）

use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub enum PipelineEvent {
    LoadingConfig,
    ConfigLoaded,
    ReadingInput { path: PathBuf },
    InputRead { chars: usize },
    Extracting,
    Extracted { count: usize },
    Rendering,
    Rendered { path: PathBuf, count: usize },
}
