//! Raw-document input and extracted text block types.

use crate::format::InputFormat;
use serde::{Deserialize, Serialize};

/// An immutable raw document: byte content plus declared format.
///
/// This is the sole input to the pipeline. The declared format may come
/// from a file extension or an upload content type; callers that only
/// have bytes can use [`InputFormat::sniff`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDocument {
    /// Raw byte content of the document.
    pub data: Vec<u8>,
    /// Declared input format.
    pub format: InputFormat,
}

impl RawDocument {
    /// Create a raw document from bytes and a declared format.
    #[must_use]
    pub fn new(data: Vec<u8>, format: InputFormat) -> Self {
        Self { data, format }
    }
}

/// Origin of a text block within the source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockOrigin {
    /// Body paragraph (DOCX).
    Paragraph,
    /// Table cell, emitted row-major (DOCX).
    TableCell,
    /// Section header (DOCX).
    Header,
    /// Section footer (DOCX).
    Footer,
    /// Page number, 1-based (PDF).
    Page(u32),
}

impl std::fmt::Display for BlockOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Paragraph => write!(f, "paragraph"),
            Self::TableCell => write!(f, "table_cell"),
            Self::Header => write!(f, "header"),
            Self::Footer => write!(f, "footer"),
            Self::Page(n) => write!(f, "page:{n}"),
        }
    }
}

/// An ordered unit of extracted text with its origin tag.
///
/// Block sequence preserves document order; downstream consumers rely on
/// the joined buffer keeping block boundaries as newlines so line-start
/// regex anchors remain valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextBlock {
    /// Index of this block within the extraction, in document order.
    pub id: usize,
    /// Where the text came from.
    pub origin: BlockOrigin,
    /// Extracted text content.
    pub text: String,
}

/// Result of document text extraction: the normalized buffer plus the
/// ordered block list it was joined from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extraction {
    /// Normalized text buffer; blocks joined with `\n`.
    pub text: String,
    /// Source blocks in document order.
    pub blocks: Vec<TextBlock>,
}

impl Extraction {
    /// Build an extraction from ordered blocks, joining block text with
    /// newlines into the normalized buffer.
    #[must_use]
    pub fn from_blocks(blocks: Vec<TextBlock>) -> Self {
        let text = blocks
            .iter()
            .map(|b| b.text.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        Self { text, blocks }
    }

    /// Whether no usable text was extracted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}
