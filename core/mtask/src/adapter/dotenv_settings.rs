//! .env / 環境変数から Settings を読む SettingsLoader 実装

use crate::domain::Settings;
use crate::ports::outbound::SettingsLoader;
use common::error::Error;
use std::path::PathBuf;

const DOTENV_FILE: &str = ".env";

/// 実行ファイル隣の .env を優先し、無ければ dotenv の既定探索（カレントと祖先）を使う
///
/// 既にプロセス環境にある値は上書きしない（dotenv の仕様）。
pub struct DotenvSettingsLoader {
    exe_dir: PathBuf,
}

impl DotenvSettingsLoader {
    pub fn new(exe_dir: PathBuf) -> Self {
        Self { exe_dir }
    }

    /// .env を読み込み、エラー表示に使う .env の場所を返す
    fn load_dotenv(&self) -> PathBuf {
        let beside_exe = self.exe_dir.join(DOTENV_FILE);
        if beside_exe.is_file() && dotenv::from_path(&beside_exe).is_ok() {
            return beside_exe;
        }
        match dotenv::dotenv() {
            Ok(found) => found,
            Err(_) => beside_exe,
        }
    }
}

impl SettingsLoader for DotenvSettingsLoader {
    fn load(&self) -> Result<Settings, Error> {
        let location = self.load_dotenv();
        Settings::from_lookup(|key| std::env::var(key).ok(), &location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_reads_env_file_beside_exe() {
        // 他のテストと衝突しないよう固有のキー名で確認する
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(".env"),
            "MTASK_TEST_DOTENV_PROBE=from-file\n",
        )
        .unwrap();
        let loader = DotenvSettingsLoader::new(dir.path().to_path_buf());
        let location = loader.load_dotenv();
        assert_eq!(location, dir.path().join(".env"));
        assert_eq!(
            std::env::var("MTASK_TEST_DOTENV_PROBE").ok().as_deref(),
            Some("from-file")
        );
    }
}
