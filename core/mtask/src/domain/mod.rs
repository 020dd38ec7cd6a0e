//! mtask 固有のドメイン型（型と不変条件）

pub mod command;
pub mod discovered_file;
pub mod document;
pub mod progress;
pub mod settings;
pub mod sheet;
pub mod task;

pub use command::AppCommand;
pub use discovered_file::{DiscoveredFile, PickOutcome};
pub use document::DocumentKind;
pub use progress::PipelineEvent;
pub use settings::Settings;
pub use sheet::SheetLayout;
pub use task::{ExtractionResult, TaskCategory, TaskRecord};
