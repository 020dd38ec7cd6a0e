//! ユースケース層（ポート経由でのみ外界に触れる）

pub mod app;
pub mod discover;
pub mod extract;
pub mod read_document;
pub mod render;

pub use app::{MtaskDeps, MtaskUseCase, RunOutcome, RunRequest, RunSummary};
