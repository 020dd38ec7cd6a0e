//! 抽出パイプライン（入力解決 → 設定 → 読込 → 抽出 → 出力）
//!
//! 各ステージは前のステージが完了してから始まる。I/O はすべて注入されたポート経由。

use crate::domain::{ExtractionResult, PickOutcome, PipelineEvent, TaskCategory};
use crate::ports::outbound::{
    DocxTextExtractor, FilePicker, LlmProviderFactory, ProgressReporter, SettingsLoader,
    SpreadsheetWriter,
};
use crate::usecase::discover::FileDiscovery;
use crate::usecase::extract::TaskExtractor;
use crate::usecase::read_document::DocumentReader;
use crate::usecase::render::SpreadsheetRenderer;
use common::error::Error;
use common::ports::outbound::{Clock, FileSystem, Log, LogLevel, LogRecord};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

// --- 責務別 Deps（usecase が定義を所有し、wiring は組み立てるだけ）

pub struct MtaskDeps {
    pub input: InputDeps,
    pub model: ModelDeps,
    pub output: OutputDeps,
    pub obs: ObsDeps,
}

pub struct InputDeps {
    pub fs: Arc<dyn FileSystem>,
    pub clock: Arc<dyn Clock>,
    pub docx: Arc<dyn DocxTextExtractor>,
    pub picker: Arc<dyn FilePicker>,
}

pub struct ModelDeps {
    pub settings_loader: Arc<dyn SettingsLoader>,
    pub provider_factory: Arc<dyn LlmProviderFactory>,
}

pub struct OutputDeps {
    pub writer: Arc<dyn SpreadsheetWriter>,
    pub progress: Arc<dyn ProgressReporter>,
}

pub struct ObsDeps {
    pub log: Arc<dyn Log>,
}

/// 1 回の実行要求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRequest {
    /// None のときは `discovery_dir` を走査してピッカーで選ぶ
    pub input: Option<PathBuf>,
    pub output: PathBuf,
    pub discovery_dir: PathBuf,
}

/// 成功時の要約（表示は CLI の責務）
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub result: ExtractionResult,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    Completed(RunSummary),
    /// ピッカーで終了が選ばれた（以降の処理はしない）
    Quit,
}

/// mtask のユースケース（アダプター経由で I/O を行う）
pub struct MtaskUseCase {
    discovery: FileDiscovery,
    reader: DocumentReader,
    extractor: TaskExtractor,
    renderer: SpreadsheetRenderer,
    picker: Arc<dyn FilePicker>,
    settings_loader: Arc<dyn SettingsLoader>,
    provider_factory: Arc<dyn LlmProviderFactory>,
    progress: Arc<dyn ProgressReporter>,
    log: Arc<dyn Log>,
}

impl MtaskUseCase {
    pub fn new(deps: MtaskDeps) -> Self {
        let MtaskDeps {
            input,
            model,
            output,
            obs,
        } = deps;
        Self {
            discovery: FileDiscovery::new(Arc::clone(&input.fs), input.clock),
            reader: DocumentReader::new(input.fs, input.docx),
            extractor: TaskExtractor::new(Arc::clone(&obs.log)),
            renderer: SpreadsheetRenderer::new(output.writer),
            picker: input.picker,
            settings_loader: model.settings_loader,
            provider_factory: model.provider_factory,
            progress: output.progress,
            log: obs.log,
        }
    }

    /// パイプラインを最後まで実行する
    pub fn run(&self, request: &RunRequest) -> Result<RunOutcome, Error> {
        let input = match self.resolve_input(request.input.as_deref(), &request.discovery_dir)? {
            Some(path) => path,
            None => {
                self.log_info("lifecycle", "picker quit");
                return Ok(RunOutcome::Quit);
            }
        };

        self.progress.report(&PipelineEvent::LoadingConfig);
        let settings = self.timed("config", || self.settings_loader.load())?;
        let _ = self.log.log(
            &LogRecord::new(LogLevel::Info, "usecase", "config", "settings loaded")
                .field("model", settings.model.as_ref())
                .field("base_url", settings.base_url.as_ref())
                .field("api_key", settings.api_key.redacted()),
        );
        self.progress.report(&PipelineEvent::ConfigLoaded);

        self.progress.report(&PipelineEvent::ReadingInput {
            path: input.clone(),
        });
        let text = self.timed("read", || self.reader.read_text(&input))?;
        self.progress.report(&PipelineEvent::InputRead {
            chars: text.chars().count(),
        });

        self.progress.report(&PipelineEvent::Extracting);
        let provider = self.provider_factory.create(&settings)?;
        let result = self.timed("extract", || self.extractor.extract(provider.as_ref(), &text))?;
        let _ = self.log.log(
            &LogRecord::new(LogLevel::Info, "usecase", "extract", "tasks extracted")
                .field("info", result.count_of(TaskCategory::Info))
                .field("action", result.count_of(TaskCategory::Action))
                .field(
                    "unassigned",
                    result.tasks().iter().filter(|t| t.is_unassigned()).count(),
                ),
        );
        self.progress.report(&PipelineEvent::Extracted {
            count: result.len(),
        });

        self.progress.report(&PipelineEvent::Rendering);
        self.timed("render", || self.renderer.render(&result, &request.output))?;
        self.progress.report(&PipelineEvent::Rendered {
            path: request.output.clone(),
            count: result.len(),
        });

        Ok(RunOutcome::Completed(RunSummary {
            input,
            output: request.output.clone(),
            result,
        }))
    }

    /// 明示パスがあればそれを使い、無ければ走査してピッカーで選ばせる
    fn resolve_input(&self, explicit: Option<&Path>, dir: &Path) -> Result<Option<PathBuf>, Error> {
        if let Some(path) = explicit {
            return Ok(Some(path.to_path_buf()));
        }
        let files = self.discovery.discover(dir)?;
        let _ = self.log.log(
            &LogRecord::new(LogLevel::Info, "usecase", "discover", "directory scanned")
                .field("dir", dir.display().to_string())
                .field("candidates", files.len()),
        );
        if files.is_empty() {
            return Err(Error::NoFiles(dir.to_path_buf()));
        }
        match self.picker.pick(&files)? {
            PickOutcome::Selected(path) => Ok(Some(path)),
            PickOutcome::Quit => Ok(None),
        }
    }

    /// ステージの所要時間と失敗をログに残す
    fn timed<T>(&self, stage: &str, f: impl FnOnce() -> Result<T, Error>) -> Result<T, Error> {
        let started = Instant::now();
        let result = f();
        let elapsed_ms = started.elapsed().as_millis() as u64;
        let record = match &result {
            Ok(_) => LogRecord::new(LogLevel::Info, "usecase", "perf", "stage finished"),
            Err(e) => LogRecord::new(LogLevel::Error, "usecase", "error", e.to_string()),
        };
        let _ = self.log.log(
            &record
                .field("stage", stage)
                .field("elapsed_ms", elapsed_ms),
        );
        result
    }

    fn log_info(&self, kind: &str, message: &str) {
        let _ = self
            .log
            .log(&LogRecord::new(LogLevel::Info, "usecase", kind, message));
    }
}
