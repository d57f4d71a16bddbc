//! Error types for the resume parsing pipeline.
//!
//! Only document-level unreadability is a hard failure. Absence of any
//! individual field is modeled as zero candidates for that field, and
//! degraded extraction paths are reported through the non-fatal warning
//! channel ([`crate::ParseWarning`]), never through this enum.

use crate::format::InputFormat;
use thiserror::Error;

/// Error types that can occur while parsing a resume document.
///
/// # Examples
///
/// ```rust,ignore
/// use resumelens_core::{ResumeError, RawDocument, InputFormat};
///
/// match parser.parse(&doc) {
///     Ok(outcome) => println!("score: {}", outcome.resume.overall_score),
///     Err(ResumeError::UnreadableDocument { format, reason }) => {
///         eprintln!("cannot read {format} document: {reason}");
///     }
///     Err(e) => eprintln!("error: {e}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum ResumeError {
    /// The document container could not be opened or every extraction
    /// strategy failed. Fatal to the single invocation; retry policy
    /// belongs to the caller.
    #[error("unreadable {format} document: {reason}")]
    UnreadableDocument {
        /// Declared or sniffed input format.
        format: InputFormat,
        /// Underlying cause, e.g. the zip or PDF parser message.
        reason: String,
    },

    /// The byte stream does not match any supported format.
    #[error("format detection error: {0}")]
    Format(String),

    /// Scratch-file I/O failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for [`Result<T, ResumeError>`].
pub type Result<T> = std::result::Result<T, ResumeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreadable_document_display() {
        let error = ResumeError::UnreadableDocument {
            format: InputFormat::Pdf,
            reason: "both extraction strategies failed".to_string(),
        };
        let display = format!("{error}");
        assert_eq!(
            display,
            "unreadable pdf document: both extraction strategies failed"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "scratch file missing");
        let err: ResumeError = io_err.into();
        match err {
            ResumeError::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn inner() -> Result<()> {
            Err(ResumeError::Format("not a pdf or docx".to_string()))
        }
        fn outer() -> Result<()> {
            inner()?;
            Ok(())
        }
        match outer() {
            Err(ResumeError::Format(msg)) => assert!(msg.contains("pdf")),
            _ => panic!("expected Format error to propagate"),
        }
    }

    #[test]
    fn test_error_size() {
        // Errors cross every layer of the pipeline; keep them small.
        assert!(std::mem::size_of::<ResumeError>() < 128);
    }
}
