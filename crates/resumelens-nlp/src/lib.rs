//! # resumelens-nlp
//!
//! Field extraction engine: consumes the normalized text buffer plus its
//! block list and produces typed field candidates using rule-based
//! entity recognition, deterministic pattern rules, and positional
//! heuristics.
//!
//! Extraction never fails outright: absence of a field kind yields zero
//! candidates of that kind, and a near-empty buffer yields an empty
//! candidate set plus a low-content warning.

pub mod education;
pub mod experience;
pub mod ner;
pub mod patterns;
pub mod personal;
pub mod sections;
pub mod skills;

pub use skills::SkillCategorizer;

use resumelens_core::{Extraction, FieldCandidate, ParseWarning, TextBlock, Vocabulary};

/// Maps buffer line indices back to the block each line came from.
///
/// Blocks are joined with `\n` into the buffer; a block contributes as
/// many buffer lines as its text has lines.
#[derive(Debug, Clone)]
pub struct BlockLineMap {
    line_to_block: Vec<usize>,
}

impl BlockLineMap {
    /// Build the map from the extraction's ordered block list.
    #[must_use]
    pub fn new(blocks: &[TextBlock]) -> Self {
        let mut line_to_block = Vec::new();
        for block in blocks {
            let lines = block.text.lines().count().max(1);
            for _ in 0..lines {
                line_to_block.push(block.id);
            }
        }
        Self { line_to_block }
    }

    /// Block id for a buffer line, if the line exists.
    #[must_use]
    pub fn block_of(&self, line: usize) -> Option<usize> {
        self.line_to_block.get(line).copied()
    }

    /// Deduplicated block ids covering a line range.
    #[must_use]
    pub fn blocks_for(&self, lines: impl IntoIterator<Item = usize>) -> Vec<usize> {
        let mut ids: Vec<usize> = lines
            .into_iter()
            .filter_map(|l| self.block_of(l))
            .collect();
        ids.dedup();
        ids
    }
}

/// The field extraction engine, parameterized by injected vocabulary.
#[derive(Debug, Clone, Copy)]
pub struct FieldExtractor<'a> {
    vocab: &'a Vocabulary,
}

impl<'a> FieldExtractor<'a> {
    /// Create an extractor over the given vocabulary tables.
    #[must_use]
    pub const fn new(vocab: &'a Vocabulary) -> Self {
        Self { vocab }
    }

    /// Extract all field candidates from the buffer.
    ///
    /// Returns the candidate set together with any non-fatal warnings.
    /// Never fails; an empty buffer produces no candidates and a
    /// [`ParseWarning::LowContent`] warning.
    #[must_use]
    pub fn extract_fields(
        &self,
        extraction: &Extraction,
    ) -> (Vec<FieldCandidate>, Vec<ParseWarning>) {
        let mut warnings = Vec::new();
        let trimmed_len = extraction.text.trim().chars().count();
        if trimmed_len < self.vocab.min_text_length {
            warnings.push(ParseWarning::LowContent {
                length: trimmed_len,
            });
            if trimmed_len == 0 {
                return (Vec::new(), warnings);
            }
        }

        let lines: Vec<&str> = extraction.text.lines().collect();
        let map = BlockLineMap::new(&extraction.blocks);
        let sections = sections::split_sections(&lines, self.vocab);

        let mut candidates = Vec::new();
        candidates.extend(personal::extract_personal(&lines, &map, self.vocab));
        candidates.extend(personal::extract_summary(
            &lines,
            &sections,
            &map,
            &mut warnings,
        ));
        candidates.extend(experience::extract_experience(
            &sections,
            &map,
            &mut warnings,
        ));
        candidates.extend(education::extract_education(&sections, &map));
        candidates.extend(skills::extract_skill_tokens(
            &extraction.text,
            &sections,
            &map,
            self.vocab,
        ));

        log::debug!(
            "extracted {} candidates from {} lines",
            candidates.len(),
            lines.len()
        );
        (candidates, warnings)
    }
}
