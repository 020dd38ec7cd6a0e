//! CLI から解釈したコマンド

use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    Help,
    Version,
    /// 抽出パイプラインを実行する
    Run {
        /// None のときは `dir` を走査して対話的に選ぶ
        input: Option<PathBuf>,
        output: PathBuf,
        /// 走査ディレクトリ（None のときは実行ファイルのディレクトリ）
        dir: Option<PathBuf>,
    },
}
