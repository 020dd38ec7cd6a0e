mod adapter;
mod cli;
mod domain;
mod ports;
mod usecase;
mod wiring;

#[cfg(test)]
mod tests;

use cli::{config_to_command, parse_args};
use common::error::Error;
use common::ports::outbound::{LogLevel, LogRecord};
use domain::{AppCommand, TaskRecord};
use ports::inbound::UseCaseRunner;
use std::process;
use usecase::{RunOutcome, RunRequest, RunSummary};
use wiring::{wire_mtask, App};

/// 説明文の要約表示で見せる最大文字数
const SUMMARY_PREVIEW_CHARS: usize = 50;

/// AppCommand をディスパッチする Runner（match は main レイヤーに集約）
struct Runner {
    app: App,
}

impl UseCaseRunner for Runner {
    fn run(&self, command: AppCommand) -> Result<i32, Error> {
        let command_name = cmd_name_for_log(&command);
        let _ = self.app.logger.log(
            &LogRecord::new(LogLevel::Info, "cli", "lifecycle", "command started")
                .field("command", command_name),
        );

        let result = match command {
            AppCommand::Help => {
                print_help();
                Ok(0)
            }
            AppCommand::Version => {
                println!("mtask {}", env!("CARGO_PKG_VERSION"));
                Ok(0)
            }
            AppCommand::Run { input, output, dir } => {
                print_banner(input.as_deref(), &output);
                let request = RunRequest {
                    input,
                    output,
                    discovery_dir: dir.unwrap_or_else(|| self.app.default_dir.clone()),
                };
                self.app.use_case.run(&request).map(|outcome| match outcome {
                    RunOutcome::Completed(summary) => {
                        print_summary(&summary);
                        0
                    }
                    RunOutcome::Quit => {
                        println!("已退出");
                        0
                    }
                })
            }
        };

        let code = match &result {
            Ok(code) => *code,
            Err(e) => e.exit_code(),
        };
        let _ = self.app.logger.log(
            &LogRecord::new(LogLevel::Info, "cli", "lifecycle", "command finished")
                .field("command", command_name)
                .field("exit_code", code),
        );
        if let Err(ref e) = result {
            let _ = self
                .app
                .logger
                .log(&LogRecord::new(LogLevel::Error, "cli", "error", e.to_string()));
        }
        result
    }
}

fn cmd_name_for_log(cmd: &AppCommand) -> &'static str {
    match cmd {
        AppCommand::Help => "help",
        AppCommand::Version => "version",
        AppCommand::Run { .. } => "run",
    }
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("\n❌ 错误: {}", e);
            if let Some(hint) = e.hint() {
                eprintln!("💡 {}", hint);
            }
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

pub fn run() -> Result<i32, Error> {
    let config = parse_args()?;
    // 登録できなくても処理は続ける（Ctrl+C は既定動作で終了する）
    let _ = adapter::install_cancel_handler();
    let app = wire_mtask(config.verbose);
    let runner = Runner { app };
    runner.run(config_to_command(&config))
}

fn print_banner(input: Option<&std::path::Path>, output: &std::path::Path) {
    println!("=== 会议纪要任务提取工具 ===");
    match input {
        Some(path) => println!("输入文件: {}", path.display()),
        None => println!("输入文件: (从目录中选择)"),
    }
    println!("输出文件: {}", output.display());
    println!();
}

/// 説明文の先頭 50 文字（超えるときは ... を付ける）
fn description_preview(description: &str) -> String {
    let mut chars = description.chars();
    let head: String = chars.by_ref().take(SUMMARY_PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}

fn summary_lines(summary: &RunSummary) -> Vec<String> {
    let mut lines = vec![
        format!("Excel文件已生成: {}", summary.output.display()),
        format!("共提取项目 {} 项", summary.result.len()),
        String::new(),
        "=== 提取摘要 ===".to_string(),
    ];
    for (i, task) in summary.result.tasks().iter().enumerate() {
        lines.extend(task_lines(i + 1, task));
    }
    lines
}

fn task_lines(index: usize, task: &TaskRecord) -> [String; 3] {
    [
        format!("{}. {} - {} - {}", index, task.category, task.owner, task.due),
        format!("   {}", description_preview(&task.description)),
        String::new(),
    ]
}

fn print_summary(summary: &RunSummary) {
    for line in summary_lines(summary) {
        println!("{}", line);
    }
}

fn print_usage() {
    eprintln!("Usage: mtask [options] [input_file]");
}

fn print_help() {
    println!("Usage: mtask [options] [input_file]");
    println!("从会议记录中提取信息和行动项，生成Excel清单。");
    println!();
    println!("Arguments:");
    println!("  input_file                 会议记录文件 (.md/.txt/.docx)。省略时扫描目录并交互选择");
    println!();
    println!("Options:");
    println!("  -o, --output <path>        输出Excel文件路径 (默认: meeting_tasks.xlsx)");
    println!("  -d, --dir <directory>      未指定输入文件时扫描的目录 (默认: 程序所在目录)");
    println!("  -v, --verbose              在标准错误输出调试日志");
    println!("  -h, --help                 显示帮助信息");
    println!("  -V, --version              显示版本");
    println!();
    println!("Environment (.env):");
    println!("  ARK_API_KEY     API密钥 (必填)");
    println!("  MODEL_ID        模型ID (默认: {})", domain::settings::DEFAULT_MODEL_ID);
    println!("  BASE_URL        API地址 (默认: {})", domain::settings::DEFAULT_BASE_URL);
    println!("  MTASK_LOG_FILE  设置后以JSONL格式追加结构化日志");
    println!();
    println!("Examples:");
    println!("  mtask 周会记录.md");
    println!("  mtask 评审纪要.docx -o 评审任务.xlsx");
    println!("  mtask -d ~/notes");
}
