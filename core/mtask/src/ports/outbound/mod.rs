//! Outbound ポート: アプリが外界を使うための trait

pub mod docx_text_extractor;
pub mod file_picker;
pub mod llm_provider_factory;
pub mod progress_reporter;
pub mod settings_loader;
pub mod spreadsheet_writer;

pub use docx_text_extractor::{DocxContent, DocxTextExtractor};
pub use file_picker::FilePicker;
pub use llm_provider_factory::LlmProviderFactory;
pub use progress_reporter::ProgressReporter;
pub use settings_loader::SettingsLoader;
pub use spreadsheet_writer::SpreadsheetWriter;
