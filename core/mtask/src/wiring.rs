//! 配線: 標準アダプタで UseCase を組み立てる

use std::path::PathBuf;
use std::sync::Arc;

use common::adapter::{FileJsonLog, NoopLog, StdClock, StdFileSystem, StderrLog};
use common::ports::outbound::{FileSystem, Log, LogLevel};

use crate::adapter::env::{exe_dir, log_file_from_env};
use crate::adapter::{
    CliFilePicker, ConsoleProgress, DotenvSettingsLoader, OpenAiProviderFactory,
    XlsxSpreadsheetWriter, ZipDocxExtractor,
};
use crate::usecase::app::{InputDeps, ModelDeps, ObsDeps, OutputDeps};
use crate::usecase::{MtaskDeps, MtaskUseCase};

/// 配線で組み立てた部品（main の AppCommand ディスパッチで利用）
pub struct App {
    pub use_case: MtaskUseCase,
    /// -d 未指定時の走査ディレクトリ
    pub default_dir: PathBuf,
    pub logger: Arc<dyn Log>,
}

/// MTASK_LOG_FILE があれば JSONL、無ければ -v のとき stderr、どちらも無ければ捨てる
fn make_logger(fs: &Arc<dyn FileSystem>, verbose: bool) -> Arc<dyn Log> {
    match log_file_from_env() {
        Some(path) => Arc::new(FileJsonLog::new(Arc::clone(fs), path)),
        None if verbose => Arc::new(StderrLog::new(LogLevel::Debug)),
        None => Arc::new(NoopLog),
    }
}

/// 配線: 標準アダプタで App を組み立てる
pub fn wire_mtask(verbose: bool) -> App {
    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
    let logger = make_logger(&fs, verbose);
    let default_dir = exe_dir();

    let use_case = MtaskUseCase::new(MtaskDeps {
        input: InputDeps {
            fs: Arc::clone(&fs),
            clock: Arc::new(StdClock),
            docx: Arc::new(ZipDocxExtractor),
            picker: Arc::new(CliFilePicker),
        },
        model: ModelDeps {
            settings_loader: Arc::new(DotenvSettingsLoader::new(default_dir.clone())),
            provider_factory: Arc::new(OpenAiProviderFactory),
        },
        output: OutputDeps {
            writer: Arc::new(XlsxSpreadsheetWriter::new(Arc::clone(&fs))),
            progress: Arc::new(ConsoleProgress),
        },
        obs: ObsDeps {
            log: Arc::clone(&logger),
        },
    });

    App {
        use_case,
        default_dir,
        logger,
    }
}
