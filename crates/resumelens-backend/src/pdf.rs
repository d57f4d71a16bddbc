//! PDF text extraction with ordered strategy fallback
//!
//! Two strategies are tried in sequence: a layout-aware extractor
//! (`pdf-extract`, preserves reading order and spacing) and a simpler
//! stream-based extractor (`lopdf`). A strategy is skipped when it
//! errors or yields an empty result; a result under the minimum length
//! is kept only as a fallback if no later strategy does better. Both
//! strategies tag output per page.
//!
//! The policy is an ordered list rather than nested branching so more
//! strategies can be added without restructuring.

use crate::traits::TextBackend;
use resumelens_core::{
    BlockOrigin, Extraction, InputFormat, RawDocument, Result, ResumeError, TextBlock,
};

/// Minimum trimmed text length for a strategy result to be accepted
/// outright; shorter non-empty results are kept only as a last resort.
const MIN_STRATEGY_TEXT: usize = 100;

/// A single PDF extraction strategy producing per-page text.
trait PdfStrategy: Send + Sync {
    /// Strategy name, for logs and failure reasons.
    fn name(&self) -> &'static str;

    /// Extract text per page, 1-based page order.
    fn extract_pages(&self, data: &[u8]) -> std::result::Result<Vec<String>, String>;
}

/// Layout-aware extraction via `pdf-extract`; preserves reading order
/// and spacing, preferred for multi-column resumes.
struct LayoutAware;

impl PdfStrategy for LayoutAware {
    fn name(&self) -> &'static str {
        "layout-aware"
    }

    fn extract_pages(&self, data: &[u8]) -> std::result::Result<Vec<String>, String> {
        let text = pdf_extract::extract_text_from_mem(data).map_err(|e| e.to_string())?;
        // Form feeds mark page breaks in the plain-text output.
        Ok(text.split('\u{0c}').map(ToString::to_string).collect())
    }
}

/// Stream-based extraction via `lopdf`; less layout-faithful but
/// tolerant of PDFs the layout-aware path rejects.
struct StreamBased;

impl PdfStrategy for StreamBased {
    fn name(&self) -> &'static str {
        "stream-based"
    }

    fn extract_pages(&self, data: &[u8]) -> std::result::Result<Vec<String>, String> {
        let doc = lopdf::Document::load_mem(data).map_err(|e| e.to_string())?;
        let page_numbers: Vec<u32> = doc.get_pages().keys().copied().collect();
        if page_numbers.is_empty() {
            return Err("document has no pages".to_string());
        }
        let mut pages = Vec::with_capacity(page_numbers.len());
        let mut last_err = None;
        for number in page_numbers {
            match doc.extract_text(&[number]) {
                Ok(text) => pages.push(text),
                Err(e) => {
                    last_err = Some(e.to_string());
                    pages.push(String::new());
                }
            }
        }
        if pages.iter().all(|p| p.trim().is_empty()) {
            return Err(last_err.unwrap_or_else(|| "no text on any page".to_string()));
        }
        Ok(pages)
    }
}

/// PDF text extraction backend holding the ordered strategy list.
pub struct PdfBackend {
    strategies: Vec<Box<dyn PdfStrategy>>,
}

impl Default for PdfBackend {
    fn default() -> Self {
        Self {
            strategies: vec![Box::new(LayoutAware), Box::new(StreamBased)],
        }
    }
}

impl std::fmt::Debug for PdfBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<_> = self.strategies.iter().map(|s| s.name()).collect();
        f.debug_struct("PdfBackend")
            .field("strategies", &names)
            .finish()
    }
}

impl TextBackend for PdfBackend {
    #[inline]
    fn format(&self) -> InputFormat {
        InputFormat::Pdf
    }

    fn extract_text(&self, doc: &RawDocument) -> Result<Extraction> {
        let mut best: Option<Vec<String>> = None;
        let mut reasons = Vec::new();

        for strategy in &self.strategies {
            match strategy.extract_pages(&doc.data) {
                Ok(pages) => {
                    let total: usize = pages.iter().map(|p| p.trim().len()).sum();
                    if total == 0 {
                        log::warn!("pdf strategy {} produced no text", strategy.name());
                        reasons.push(format!("{}: empty result", strategy.name()));
                        continue;
                    }
                    if total >= MIN_STRATEGY_TEXT {
                        log::debug!(
                            "pdf strategy {} accepted with {total} characters",
                            strategy.name()
                        );
                        return Ok(Self::pages_to_extraction(pages));
                    }
                    log::warn!(
                        "pdf strategy {} yielded only {total} characters, trying next",
                        strategy.name()
                    );
                    // Keep the longest short result as a fallback.
                    let better = best
                        .as_ref()
                        .map_or(true, |b| Self::total_len(b) < total);
                    if better {
                        best = Some(pages);
                    }
                }
                Err(e) => {
                    log::warn!("pdf strategy {} failed: {e}", strategy.name());
                    reasons.push(format!("{}: {e}", strategy.name()));
                }
            }
        }

        match best {
            Some(pages) => Ok(Self::pages_to_extraction(pages)),
            None => Err(ResumeError::UnreadableDocument {
                format: InputFormat::Pdf,
                reason: reasons.join("; "),
            }),
        }
    }
}

impl PdfBackend {
    fn total_len(pages: &[String]) -> usize {
        pages.iter().map(|p| p.trim().len()).sum()
    }

    /// Build page-tagged blocks, skipping pages with no text. Page
    /// numbers stay 1-based and follow document order.
    fn pages_to_extraction(pages: Vec<String>) -> Extraction {
        let mut blocks = Vec::new();
        for (idx, page) in pages.into_iter().enumerate() {
            let text = page.trim();
            if text.is_empty() {
                continue;
            }
            #[allow(clippy::cast_possible_truncation)]
            let number = (idx + 1) as u32;
            blocks.push(TextBlock {
                id: blocks.len(),
                origin: BlockOrigin::Page(number),
                text: text.to_string(),
            });
        }
        Extraction::from_blocks(blocks)
    }
}
