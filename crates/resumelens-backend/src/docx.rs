//! DOCX (Microsoft Word) text extraction
//!
//! Manual ZIP + XML parsing. A DOCX file is a ZIP archive; the parts we
//! read are:
//! - `word/document.xml`: body paragraphs and tables
//! - `word/header*.xml` / `word/footer*.xml`: section furniture
//!
//! Blocks are emitted as body paragraphs in document order, then table
//! rows (row-major, cells joined by `" | "`), then headers and footers,
//! each block becoming one line of the normalized buffer.

use crate::scratch::ScratchFile;
use crate::traits::TextBackend;
use quick_xml::events::Event;
use quick_xml::Reader;
use resumelens_core::{
    BlockOrigin, Extraction, InputFormat, RawDocument, Result, ResumeError, TextBlock,
};
use std::fs::File;
use std::io::Read;
use zip::ZipArchive;

/// Delimiter between cells of one table row.
const CELL_DELIMITER: &str = " | ";

/// DOCX text extraction backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocxBackend;

/// Body content collected from `word/document.xml`.
#[derive(Debug, Default)]
struct BodyContent {
    paragraphs: Vec<String>,
    table_rows: Vec<String>,
}

impl TextBackend for DocxBackend {
    #[inline]
    fn format(&self) -> InputFormat {
        InputFormat::Docx
    }

    fn extract_text(&self, doc: &RawDocument) -> Result<Extraction> {
        // The ZIP reader wants a seekable file; spill the stream to a
        // scoped scratch file that drop removes on every exit path.
        let scratch = ScratchFile::write(&doc.data)?;
        let file = File::open(scratch.path())?;
        let mut archive = ZipArchive::new(file).map_err(|e| ResumeError::UnreadableDocument {
            format: InputFormat::Docx,
            reason: format!("failed to open DOCX as ZIP: {e}"),
        })?;

        let body = Self::parse_document_xml(&mut archive)?;
        let furniture = Self::parse_furniture(&mut archive);

        let mut blocks = Vec::new();
        let mut push = |origin: BlockOrigin, text: String| {
            blocks.push(TextBlock {
                id: blocks.len(),
                origin,
                text,
            });
        };
        for text in body.paragraphs {
            push(BlockOrigin::Paragraph, text);
        }
        for text in body.table_rows {
            push(BlockOrigin::TableCell, text);
        }
        for (is_header, text) in furniture {
            let origin = if is_header {
                BlockOrigin::Header
            } else {
                BlockOrigin::Footer
            };
            push(origin, text);
        }

        log::debug!("docx extraction produced {} blocks", blocks.len());
        Ok(Extraction::from_blocks(blocks))
    }
}

impl DocxBackend {
    /// Parse `word/document.xml`, collecting body paragraphs and table
    /// rows in document order.
    fn parse_document_xml(archive: &mut ZipArchive<File>) -> Result<BodyContent> {
        let xml_content = {
            let mut document_xml =
                archive
                    .by_name("word/document.xml")
                    .map_err(|e| ResumeError::UnreadableDocument {
                        format: InputFormat::Docx,
                        reason: format!("missing word/document.xml: {e}"),
                    })?;
            let mut content = String::new();
            document_xml.read_to_string(&mut content)?;
            content
        };

        let mut reader = Reader::from_str(&xml_content);
        reader.trim_text(false);

        let mut body = BodyContent::default();
        let mut buf = Vec::new();
        let mut in_text = false;
        let mut table_depth = 0usize;
        let mut paragraph = String::new();
        let mut cell = String::new();
        let mut row: Vec<String> = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => match e.name().as_ref() {
                    b"w:t" => in_text = true,
                    b"w:tbl" => table_depth += 1,
                    b"w:p" => paragraph.clear(),
                    _ => {}
                },
                Ok(Event::Empty(e)) => match e.name().as_ref() {
                    // Tabs and line breaks become spaces so a paragraph
                    // stays one block line.
                    b"w:tab" | b"w:br" => paragraph.push(' '),
                    _ => {}
                },
                Ok(Event::Text(e)) => {
                    if in_text {
                        paragraph.push_str(&e.unescape().unwrap_or_default());
                    }
                }
                Ok(Event::End(e)) => match e.name().as_ref() {
                    b"w:t" => in_text = false,
                    b"w:p" => {
                        let text = paragraph.trim();
                        if !text.is_empty() {
                            if table_depth > 0 {
                                if !cell.is_empty() {
                                    cell.push(' ');
                                }
                                cell.push_str(text);
                            } else {
                                body.paragraphs.push(text.to_string());
                            }
                        }
                        paragraph.clear();
                    }
                    b"w:tc" => {
                        if !cell.is_empty() {
                            row.push(std::mem::take(&mut cell));
                        } else {
                            cell.clear();
                        }
                    }
                    b"w:tr" => {
                        if !row.is_empty() {
                            body.table_rows.push(row.join(CELL_DELIMITER));
                            row.clear();
                        }
                    }
                    b"w:tbl" => table_depth = table_depth.saturating_sub(1),
                    _ => {}
                },
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(ResumeError::UnreadableDocument {
                        format: InputFormat::Docx,
                        reason: format!("malformed document.xml: {e}"),
                    });
                }
                Ok(_) => {}
            }
            buf.clear();
        }

        Ok(body)
    }

    /// Collect paragraph texts from `word/header*.xml` and
    /// `word/footer*.xml` parts, headers first. Missing or malformed
    /// furniture parts are skipped rather than failing the document.
    fn parse_furniture(archive: &mut ZipArchive<File>) -> Vec<(bool, String)> {
        let mut names: Vec<String> = archive
            .file_names()
            .filter(|n| {
                (n.starts_with("word/header") || n.starts_with("word/footer"))
                    && n.ends_with(".xml")
            })
            .map(ToString::to_string)
            .collect();
        // Deterministic order: headers before footers, then by part name.
        names.sort_by_key(|n| (n.starts_with("word/footer"), n.clone()));

        let mut out = Vec::new();
        for name in names {
            let is_header = name.starts_with("word/header");
            let Ok(mut part) = archive.by_name(&name) else {
                continue;
            };
            let mut xml_content = String::new();
            if part.read_to_string(&mut xml_content).is_err() {
                continue;
            }
            for text in Self::paragraph_texts(&xml_content) {
                out.push((is_header, text));
            }
        }
        out
    }

    /// Paragraph texts from a standalone part (header/footer XML).
    fn paragraph_texts(xml_content: &str) -> Vec<String> {
        let mut reader = Reader::from_str(xml_content);
        reader.trim_text(false);

        let mut texts = Vec::new();
        let mut buf = Vec::new();
        let mut in_text = false;
        let mut paragraph = String::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) if e.name().as_ref() == b"w:t" => in_text = true,
                Ok(Event::Text(e)) => {
                    if in_text {
                        paragraph.push_str(&e.unescape().unwrap_or_default());
                    }
                }
                Ok(Event::End(e)) => match e.name().as_ref() {
                    b"w:t" => in_text = false,
                    b"w:p" => {
                        let text = paragraph.trim();
                        if !text.is_empty() {
                            texts.push(text.to_string());
                        }
                        paragraph.clear();
                    }
                    _ => {}
                },
                Ok(Event::Eof) | Err(_) => break,
                Ok(_) => {}
            }
            buf.clear();
        }
        texts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    fn wrap_body(body: &str) -> String {
        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
             <w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
             <w:body>{body}</w:body></w:document>"
        )
    }

    fn para(text: &str) -> String {
        format!("<w:p><w:r><w:t>{text}</w:t></w:r></w:p>")
    }

    fn make_docx(parts: &[(&str, &str)]) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        for (name, content) in parts {
            writer
                .start_file(*name, SimpleFileOptions::default())
                .unwrap();
            writer.write_all(content.as_bytes()).unwrap();
        }
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn test_paragraphs_in_document_order() {
        let body = format!("{}{}", para("Jane Doe"), para("Software Engineer"));
        let data = make_docx(&[("word/document.xml", &wrap_body(&body))]);
        let doc = RawDocument::new(data, InputFormat::Docx);

        let extraction = DocxBackend.extract_text(&doc).unwrap();
        assert_eq!(extraction.text, "Jane Doe\nSoftware Engineer");
        assert_eq!(extraction.blocks[0].origin, BlockOrigin::Paragraph);
        assert_eq!(extraction.blocks[0].id, 0);
        assert_eq!(extraction.blocks[1].id, 1);
    }

    #[test]
    fn test_table_rows_joined_row_major() {
        let body = format!(
            "{}<w:tbl><w:tr><w:tc>{}</w:tc><w:tc>{}</w:tc></w:tr>\
             <w:tr><w:tc>{}</w:tc><w:tc>{}</w:tc></w:tr></w:tbl>",
            para("Skills"),
            para("Rust"),
            para("Python"),
            para("Docker"),
            para("AWS"),
        );
        let data = make_docx(&[("word/document.xml", &wrap_body(&body))]);
        let doc = RawDocument::new(data, InputFormat::Docx);

        let extraction = DocxBackend.extract_text(&doc).unwrap();
        assert_eq!(extraction.text, "Skills\nRust | Python\nDocker | AWS");
        assert_eq!(extraction.blocks[1].origin, BlockOrigin::TableCell);
        assert_eq!(extraction.blocks[2].origin, BlockOrigin::TableCell);
    }

    #[test]
    fn test_headers_and_footers_follow_body() {
        let header = "<w:hdr xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
                      <w:p><w:r><w:t>Confidential</w:t></w:r></w:p></w:hdr>";
        let footer = "<w:ftr xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
                      <w:p><w:r><w:t>Page footer</w:t></w:r></w:p></w:ftr>";
        let data = make_docx(&[
            ("word/document.xml", &wrap_body(&para("Body line"))),
            ("word/header1.xml", header),
            ("word/footer1.xml", footer),
        ]);
        let doc = RawDocument::new(data, InputFormat::Docx);

        let extraction = DocxBackend.extract_text(&doc).unwrap();
        assert_eq!(extraction.text, "Body line\nConfidential\nPage footer");
        assert_eq!(extraction.blocks[1].origin, BlockOrigin::Header);
        assert_eq!(extraction.blocks[2].origin, BlockOrigin::Footer);
    }

    #[test]
    fn test_not_a_zip_is_unreadable() {
        let doc = RawDocument::new(b"definitely not a zip".to_vec(), InputFormat::Docx);
        match DocxBackend.extract_text(&doc) {
            Err(ResumeError::UnreadableDocument { format, .. }) => {
                assert_eq!(format, InputFormat::Docx);
            }
            other => panic!("expected UnreadableDocument, got {other:?}"),
        }
    }

    #[test]
    fn test_zip_without_document_xml_is_unreadable() {
        let data = make_docx(&[("word/styles.xml", "<x/>")]);
        let doc = RawDocument::new(data, InputFormat::Docx);
        match DocxBackend.extract_text(&doc) {
            Err(ResumeError::UnreadableDocument { reason, .. }) => {
                assert!(reason.contains("document.xml"));
            }
            other => panic!("expected UnreadableDocument, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_paragraphs_are_skipped() {
        let body = format!("{}<w:p/>{}", para("First"), para("Second"));
        let data = make_docx(&[("word/document.xml", &wrap_body(&body))]);
        let doc = RawDocument::new(data, InputFormat::Docx);

        let extraction = DocxBackend.extract_text(&doc).unwrap();
        assert_eq!(extraction.blocks.len(), 2);
        assert_eq!(extraction.text, "First\nSecond");
    }
}
