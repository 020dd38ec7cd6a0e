//! 候補ファイルからユーザーに 1 つ選ばせる Outbound ポート

use crate::domain::{DiscoveredFile, PickOutcome};
use common::error::Error;

/// 対話的な選択（唯一のブロッキング入力）
///
/// `files` は空でない前提（空のときは usecase が NoFiles を返し、プロンプトを出さない）。
pub trait FilePicker: Send + Sync {
    fn pick(&self, files: &[DiscoveredFile]) -> Result<PickOutcome, Error>;
}
