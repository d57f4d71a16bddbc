//! # resumelens-backend
//!
//! Document text extraction for the resume pipeline. Converts a PDF or
//! DOCX byte stream into a normalized text buffer plus an ordered list
//! of origin-tagged [`resumelens_core::TextBlock`]s.
//!
//! Backends are stateless: every call is independent and side-effect-free
//! beyond scoped scratch-file use, which is released on every exit path.

pub mod docx;
pub mod pdf;
pub mod scratch;
pub mod traits;

pub use docx::DocxBackend;
pub use pdf::PdfBackend;
pub use scratch::ScratchFile;
pub use traits::TextBackend;

use resumelens_core::{Extraction, InputFormat, RawDocument, Result, ResumeError};

/// Extract text from a raw document, dispatching to the backend for the
/// declared format.
///
/// When the byte stream's magic signature disagrees with the declared
/// format but matches the other supported format, the sniffed format
/// wins and a warning is logged.
///
/// # Errors
/// Returns [`ResumeError::UnreadableDocument`] when the container cannot
/// be opened or every extraction strategy fails.
pub fn extract_text(doc: &RawDocument) -> Result<Extraction> {
    if doc.data.is_empty() {
        return Err(ResumeError::UnreadableDocument {
            format: doc.format,
            reason: "empty byte stream".to_string(),
        });
    }

    let format = match InputFormat::sniff(&doc.data) {
        Some(sniffed) if sniffed != doc.format => {
            log::warn!(
                "declared format {} but stream looks like {}; trusting the stream",
                doc.format,
                sniffed
            );
            sniffed
        }
        _ => doc.format,
    };

    match format {
        InputFormat::Docx => DocxBackend.extract_text(doc),
        InputFormat::Pdf => PdfBackend::default().extract_text(doc),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_stream_is_unreadable() {
        let doc = RawDocument::new(Vec::new(), InputFormat::Docx);
        match extract_text(&doc) {
            Err(ResumeError::UnreadableDocument { format, reason }) => {
                assert_eq!(format, InputFormat::Docx);
                assert!(reason.contains("empty"));
            }
            other => panic!("expected UnreadableDocument, got {other:?}"),
        }
    }

    #[test]
    fn test_garbage_pdf_is_unreadable() {
        let doc = RawDocument::new(b"%PDF-1.4 but not really a pdf".to_vec(), InputFormat::Pdf);
        assert!(matches!(
            extract_text(&doc),
            Err(ResumeError::UnreadableDocument { .. })
        ));
    }
}
