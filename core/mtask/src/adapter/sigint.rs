//! Ctrl+C（SIGINT）で中断メッセージを出して終了する

use common::error::Error;

/// SIGINT ハンドラを登録する。以後 Ctrl+C はどのステージでも終了コード 1 で抜ける。
///
/// 登録は初回のみ有効（ctrlc の仕様）。
pub fn install_cancel_handler() -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(|| {
        let cancelled = Error::Cancelled;
        eprintln!("\n❌ {}", cancelled);
        std::process::exit(cancelled.exit_code());
    })
}
