//! .docx（zip 内の word/document.xml）から段落と表を取り出す DocxTextExtractor 実装

use crate::ports::outbound::{DocxContent, DocxTextExtractor};
use common::error::Error;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Cursor, Read};

const DOCUMENT_PART: &str = "word/document.xml";

pub struct ZipDocxExtractor;

impl DocxTextExtractor for ZipDocxExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<DocxContent, Error> {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
            .map_err(|e| Error::Docx(format!("不是有效的docx文件: {}", e)))?;
        let mut part = archive
            .by_name(DOCUMENT_PART)
            .map_err(|e| Error::Docx(format!("缺少 {}: {}", DOCUMENT_PART, e)))?;
        let mut xml = String::new();
        part.read_to_string(&mut xml)
            .map_err(|e| Error::Docx(format!("读取 {} 失败: {}", DOCUMENT_PART, e)))?;
        parse_document_xml(&xml)
    }
}

/// 読み飛ばす部分木。テキストボックスの中身と、mc:AlternateContent の代替表現
const SKIPPED_SUBTREES: [&[u8]; 2] = [b"txbxContent", b"Fallback"];

/// 表の入れ子を数えながら走査する。
///
/// 入れ子の表（深さ 2 以上）の段落は外側のセルの段落として扱う。
/// テキストボックスは run の中に段落を持つが、本文の段落としては数えない。
#[derive(Default)]
struct Walker {
    content: DocxContent,
    /// 読み飛ばし中の要素の深さ（0 なら通常走査）
    skip_depth: usize,
    table_depth: usize,
    in_run: bool,
    in_text: bool,
    paragraph: String,
    cell: Vec<String>,
    row: Vec<String>,
    table: Vec<Vec<String>>,
}

impl Walker {
    fn start(&mut self, local: &[u8]) {
        if self.skip_depth > 0 || SKIPPED_SUBTREES.contains(&local) {
            self.skip_depth += 1;
            return;
        }
        match local {
            b"p" => self.paragraph.clear(),
            b"r" => self.in_run = true,
            b"t" => self.in_text = self.in_run,
            b"tbl" => {
                self.table_depth += 1;
                if self.table_depth == 1 {
                    self.table.clear();
                }
            }
            b"tr" if self.table_depth == 1 => self.row.clear(),
            b"tc" if self.table_depth == 1 => self.cell.clear(),
            _ => {}
        }
    }

    fn end(&mut self, local: &[u8]) {
        if self.skip_depth > 0 {
            self.skip_depth -= 1;
            return;
        }
        match local {
            b"p" => self.finish_paragraph(),
            b"r" => self.in_run = false,
            b"t" => self.in_text = false,
            b"tc" if self.table_depth == 1 => self.row.push(self.cell.join("\n")),
            b"tr" if self.table_depth == 1 => {
                self.table.push(std::mem::take(&mut self.row));
            }
            b"tbl" => {
                self.table_depth = self.table_depth.saturating_sub(1);
                if self.table_depth == 0 {
                    self.content.tables.push(std::mem::take(&mut self.table));
                }
            }
            _ => {}
        }
    }

    /// 自己終了タグ（<w:p/>, <w:tab/>, <w:br/> など）
    fn empty(&mut self, local: &[u8]) {
        if self.skip_depth > 0 {
            return;
        }
        match local {
            b"p" => {
                self.paragraph.clear();
                self.finish_paragraph();
            }
            // pPr 内の <w:tabs><w:tab .../> はタブ位置の定義なので run 内だけ数える
            b"tab" if self.in_run => self.paragraph.push('\t'),
            b"br" | b"cr" if self.in_run => self.paragraph.push('\n'),
            _ => {}
        }
    }

    fn text(&mut self, s: &str) {
        if self.in_text && self.skip_depth == 0 {
            self.paragraph.push_str(s);
        }
    }

    fn finish_paragraph(&mut self) {
        let text = std::mem::take(&mut self.paragraph);
        if self.table_depth == 0 {
            self.content.paragraphs.push(text);
        } else {
            self.cell.push(text);
        }
    }
}

/// document.xml を段落（本文のみ）と表に分ける
pub fn parse_document_xml(xml: &str) -> Result<DocxContent, Error> {
    let mut reader = Reader::from_str(xml);
    let mut walker = Walker::default();
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => walker.start(e.local_name().as_ref()),
            Ok(Event::End(e)) => walker.end(e.local_name().as_ref()),
            Ok(Event::Empty(e)) => walker.empty(e.local_name().as_ref()),
            Ok(Event::Text(t)) => {
                let s = t
                    .unescape()
                    .map_err(|e| Error::Docx(format!("文档内容解析失败: {}", e)))?;
                walker.text(&s);
            }
            Ok(Event::CData(c)) => {
                walker.text(&String::from_utf8_lossy(&c.into_inner()));
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(Error::Docx(format!(
                    "文档XML解析失败 (位置 {}): {}",
                    reader.buffer_position(),
                    e
                )))
            }
        }
    }
    Ok(walker.content)
}
