//! 入力候補ファイルの走査（非再帰）

use crate::domain::discovered_file::{format_relative, format_size};
use crate::domain::document::is_discoverable;
use crate::domain::DiscoveredFile;
use chrono::{DateTime, Local};
use common::error::Error;
use common::ports::outbound::{Clock, FileSystem};
use std::path::Path;
use std::sync::Arc;
use std::time::UNIX_EPOCH;

/// これ未満のファイルはプレースホルダとみなして除外する
pub const MIN_FILE_SIZE: u64 = 10;

/// Office が開いている間に作るロックファイルの接頭辞
const OFFICE_LOCK_PREFIX: &str = "~$";

pub struct FileDiscovery {
    fs: Arc<dyn FileSystem>,
    clock: Arc<dyn Clock>,
}

impl FileDiscovery {
    pub fn new(fs: Arc<dyn FileSystem>, clock: Arc<dyn Clock>) -> Self {
        Self { fs, clock }
    }

    /// `dir` 直下の候補を更新時刻の新しい順に返す（同時刻は走査順＝名前順）
    pub fn discover(&self, dir: &Path) -> Result<Vec<DiscoveredFile>, Error> {
        let is_dir = self
            .fs
            .metadata(dir)
            .map(|m| m.is_dir())
            .unwrap_or(false);
        if !is_dir {
            return Err(Error::NoDirectory(dir.to_path_buf()));
        }
        // 候補のパスを絶対パスにするため、走査前に一度だけ正規化する
        let dir = self.fs.canonicalize(dir)?;

        let now = self.clock.now();
        let mut files = Vec::new();
        for path in self.fs.read_dir(&dir)? {
            if !is_discoverable(&path) {
                continue;
            }
            let name = match path.file_name() {
                Some(n) => n.to_string_lossy().into_owned(),
                None => continue,
            };
            if name.starts_with(OFFICE_LOCK_PREFIX) {
                continue;
            }
            // 走査中に消えたファイルなどは黙って飛ばす
            let meta = match self.fs.metadata(&path) {
                Ok(m) => m,
                Err(_) => continue,
            };
            if !meta.is_file() || meta.len() < MIN_FILE_SIZE {
                continue;
            }
            let modified = meta
                .modified()
                .unwrap_or_else(|| DateTime::<Local>::from(UNIX_EPOCH));
            files.push(DiscoveredFile {
                path,
                name,
                size: meta.len(),
                size_display: format_size(meta.len()),
                modified,
                modified_display: format_relative(modified, now),
            });
        }

        files.sort_by(|a, b| b.modified.cmp(&a.modified));
        Ok(files)
    }
}
