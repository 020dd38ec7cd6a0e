//! 標準入出力で候補ファイルを選ばせる FilePicker 実装

use crate::domain::{DiscoveredFile, PickOutcome};
use crate::ports::outbound::FilePicker;
use common::error::Error;
use std::io::{self, BufRead, Write};

const QUIT_WORDS: [&str; 3] = ["q", "quit", "退出"];

/// 入力 1 行を解釈する（1 始まりの番号 / 終了語）
pub fn parse_choice(line: &str, count: usize) -> Result<Option<usize>, Error> {
    let trimmed = line.trim();
    let lowered = trimmed.to_lowercase();
    if QUIT_WORDS.contains(&lowered.as_str()) {
        return Ok(None);
    }
    let n: usize = trimmed
        .parse()
        .map_err(|_| Error::InvalidSelection(format!("请输入数字 1-{}，或 q 退出", count)))?;
    if n == 0 || n > count {
        return Err(Error::InvalidSelection(format!(
            "编号超出范围，请输入 1-{}",
            count
        )));
    }
    Ok(Some(n - 1))
}

fn print_list(files: &[DiscoveredFile], out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "找到以下会议记录文件:")?;
    for (i, f) in files.iter().enumerate() {
        writeln!(
            out,
            "  {:>2}. {}  ({}, {})",
            i + 1,
            f.name,
            f.size_display,
            f.modified_display
        )?;
    }
    writeln!(out)
}

/// 有効な番号か終了語が入るまで繰り返す。EOF は Error::Cancelled
pub fn pick_from(
    files: &[DiscoveredFile],
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<PickOutcome, Error> {
    print_list(files, out)?;
    loop {
        write!(out, "请选择文件编号 (1-{}，q 退出): ", files.len())?;
        out.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Err(Error::Cancelled);
        }
        match parse_choice(&line, files.len()) {
            Ok(Some(index)) => return Ok(PickOutcome::Selected(files[index].path.clone())),
            Ok(None) => return Ok(PickOutcome::Quit),
            Err(e) => writeln!(out, "⚠️  {}", e)?,
        }
    }
}

pub struct CliFilePicker;

impl FilePicker for CliFilePicker {
    fn pick(&self, files: &[DiscoveredFile]) -> Result<PickOutcome, Error> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        pick_from(files, &mut stdin.lock(), &mut stdout.lock())
    }
}
