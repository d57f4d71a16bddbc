//! Core trait definition for text extraction backends.

use resumelens_core::{Extraction, InputFormat, RawDocument, Result};

/// A format-specific text extraction backend.
///
/// Implementations must be stateless between calls so that independent
/// pipeline instances can run concurrently without locking.
pub trait TextBackend: Send + Sync {
    /// The format this backend handles.
    fn format(&self) -> InputFormat;

    /// Extract the normalized text buffer and ordered block list.
    ///
    /// # Errors
    /// Returns [`resumelens_core::ResumeError::UnreadableDocument`] when
    /// the document cannot be read; partial extractions are never
    /// returned.
    fn extract_text(&self, doc: &RawDocument) -> Result<Extraction>;
}
