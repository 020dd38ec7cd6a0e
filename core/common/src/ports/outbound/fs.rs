//! ファイルシステム Outbound ポート
//!
//! usecase はこの trait 経由でのみファイル I/O を行う。

use crate::error::Error;
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

/// ファイルメタデータ（サイズ・種別・更新時刻）
#[derive(Debug, Clone)]
pub struct FileMetadata {
    len: u64,
    is_file: bool,
    is_dir: bool,
    modified: Option<DateTime<Local>>,
}

impl FileMetadata {
    pub fn new(len: u64, is_file: bool, is_dir: bool) -> Self {
        Self {
            len,
            is_file,
            is_dir,
            modified: None,
        }
    }

    pub fn with_modified(mut self, modified: DateTime<Local>) -> Self {
        self.modified = Some(modified);
        self
    }

    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_file(&self) -> bool {
        self.is_file
    }

    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    /// 更新時刻（取得できないプラットフォームでは None）
    pub fn modified(&self) -> Option<DateTime<Local>> {
        self.modified
    }
}

/// ファイルシステム抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdFileSystem` やテスト用のメモリ FS など。
pub trait FileSystem: Send + Sync {
    /// ファイル全体をバイト列で読む
    fn read(&self, path: &Path) -> Result<Vec<u8>, Error>;
    fn write(&self, path: &Path, contents: &[u8]) -> Result<(), Error>;
    fn create_dir_all(&self, path: &Path) -> Result<(), Error>;
    /// 存在しないときは `Error::FileNotFound`。それ以外の失敗は `Error::Io`
    fn metadata(&self, path: &Path) -> Result<FileMetadata, Error>;
    /// ディレクトリ直下のエントリのフルパス一覧（名前順）
    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>, Error>;
    /// 絶対パスに正規化する（`..` やシンボリックリンクを解決）
    fn canonicalize(&self, path: &Path) -> Result<PathBuf, Error>;
    /// 追記用に開く（存在しなければ作成）。返した Writer を drop すると閉じる。
    fn open_append(&self, path: &Path) -> Result<Box<dyn std::io::Write + Send>, Error>;

    /// パスが存在するか（metadata が取れれば true）
    fn exists(&self, path: &Path) -> bool {
        self.metadata(path).is_ok()
    }
}
