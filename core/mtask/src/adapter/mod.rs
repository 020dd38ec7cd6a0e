//! mtask のアダプター（Outbound ポートの標準実装）

pub mod cli_file_picker;
pub mod console_progress;
pub mod docx_zip;
pub mod dotenv_settings;
pub mod env;
pub mod openai_provider_factory;
pub mod sigint;
pub mod xlsx_writer;

pub use cli_file_picker::CliFilePicker;
pub use console_progress::ConsoleProgress;
pub use docx_zip::ZipDocxExtractor;
pub use dotenv_settings::DotenvSettingsLoader;
pub use openai_provider_factory::OpenAiProviderFactory;
pub use sigint::install_cancel_handler;
pub use xlsx_writer::XlsxSpreadsheetWriter;
