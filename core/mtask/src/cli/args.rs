use crate::domain::AppCommand;
use clap::builder::ArgAction;
use common::error::Error;
use std::ffi::OsString;
use std::path::PathBuf;

pub const DEFAULT_OUTPUT: &str = "meeting_tasks.xlsx";

/// CLI から受け取った生の設定
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub help: bool,
    pub version: bool,
    pub verbose: bool,
    pub input: Option<String>,
    pub output: String,
    pub dir: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            help: false,
            version: false,
            verbose: false,
            input: None,
            output: DEFAULT_OUTPUT.to_string(),
            dir: None,
        }
    }
}

fn build_clap_command() -> clap::Command {
    clap::Command::new("mtask")
        .about("从会议记录中提取信息和行动项，生成Excel清单")
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("显示帮助信息")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("version")
                .short('V')
                .long("version")
                .help("显示版本")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("在标准错误输出调试日志")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("output")
                .short('o')
                .long("output")
                .value_name("path")
                .help("输出Excel文件路径")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("dir")
                .short('d')
                .long("dir")
                .value_name("directory")
                .help("未指定输入文件时扫描的目录（默认: 程序所在目录）")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("input")
                .value_name("input_file")
                .help("会议记录文件 (.md/.txt/.docx)")
                .num_args(1),
        )
}

fn matches_to_config(matches: &clap::ArgMatches) -> Config {
    Config {
        help: matches.get_flag("help"),
        version: matches.get_flag("version"),
        verbose: matches.get_flag("verbose"),
        input: matches.get_one::<String>("input").cloned(),
        output: matches
            .get_one::<String>("output")
            .cloned()
            .unwrap_or_else(|| DEFAULT_OUTPUT.to_string()),
        dir: matches.get_one::<String>("dir").cloned(),
    }
}

/// 任意の引数列を解析する（先頭はプログラム名）
pub fn parse_args_from<I, T>(args: I) -> Result<Config, Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = build_clap_command()
        .try_get_matches_from(args)
        .map_err(|e| Error::invalid_argument(e.to_string()))?;
    Ok(matches_to_config(&matches))
}

/// プロセスのコマンドラインを解析する
pub fn parse_args() -> Result<Config, Error> {
    parse_args_from(std::env::args_os())
}

/// Config を AppCommand に変換する
pub fn config_to_command(config: &Config) -> AppCommand {
    if config.help {
        return AppCommand::Help;
    }
    if config.version {
        return AppCommand::Version;
    }
    AppCommand::Run {
        input: config.input.as_ref().map(PathBuf::from),
        output: PathBuf::from(&config.output),
        dir: config.dir.as_ref().map(PathBuf::from),
    }
}
