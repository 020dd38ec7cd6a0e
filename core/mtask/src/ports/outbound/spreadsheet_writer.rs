//! レイアウト済みの表をファイルに書き出す Outbound ポート

use crate::domain::SheetLayout;
use common::error::Error;
use std::path::Path;

/// 書式（ヘッダ色・罫線・折り返し・列幅）を適用して保存する
///
/// 親ディレクトリが無ければ作成し、既存ファイルは上書きする。
pub trait SpreadsheetWriter: Send + Sync {
    fn write(&self, layout: &SheetLayout, path: &Path) -> Result<(), Error>;
}
