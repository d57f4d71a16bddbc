//! Input format types for resume documents
//!
//! The pipeline accepts exactly two container formats: PDF and DOCX.
//! The declared format can be cross-checked against the leading magic
//! bytes of the stream with [`InputFormat::sniff`].

use serde::{Deserialize, Serialize};

/// Input document format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    /// PDF document
    Pdf,
    /// Microsoft Word document (.docx)
    Docx,
}

impl InputFormat {
    /// Parse a format from a file extension (case-insensitive).
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            _ => None,
        }
    }

    /// Sniff the format from leading magic bytes.
    ///
    /// PDF streams start with `%PDF-`; DOCX is a ZIP container and starts
    /// with `PK\x03\x04`. Returns `None` when neither signature matches,
    /// including for streams shorter than the signature.
    #[must_use]
    pub fn sniff(data: &[u8]) -> Option<Self> {
        if data.starts_with(b"%PDF-") {
            Some(Self::Pdf)
        } else if data.starts_with(b"PK\x03\x04") {
            Some(Self::Docx)
        } else {
            None
        }
    }
}

impl std::fmt::Display for InputFormat {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pdf => write!(f, "pdf"),
            Self::Docx => write!(f, "docx"),
        }
    }
}
