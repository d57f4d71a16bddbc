//! # resumelens-pipeline
//!
//! End-to-end resume parsing: a PDF or DOCX byte stream in, a scored
//! [`ParsedResume`] plus non-fatal warnings out.
//!
//! The pipeline runs text extraction, field extraction, skill
//! categorization, confidence estimation, and scoring in sequence. It
//! either returns a complete outcome or a [`resumelens_core::ResumeError`];
//! no partial record ever escapes.

mod assemble;

use chrono::NaiveDate;
use resumelens_core::{ParseWarning, ParsedResume, RawDocument, Result, ScoringWeights, Vocabulary};
use resumelens_nlp::{FieldExtractor, SkillCategorizer};
use std::time::Instant;

/// A completed parse: the assembled record plus any warnings raised
/// along the way.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutcome {
    /// The scored, immutable record.
    pub resume: ParsedResume,
    /// Non-fatal conditions observed during parsing.
    pub warnings: Vec<ParseWarning>,
}

/// The parsing pipeline. Holds the injected vocabulary and scoring
/// weights; stateless across calls.
#[derive(Debug, Clone)]
pub struct ResumeParser {
    vocab: Vocabulary,
    weights: ScoringWeights,
}

impl Default for ResumeParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ResumeParser {
    /// Parser with the production vocabulary and weights.
    #[must_use]
    pub fn new() -> Self {
        Self {
            vocab: Vocabulary::default(),
            weights: ScoringWeights::default(),
        }
    }

    /// Parser with custom tables, for reduced-vocabulary tests and
    /// callers with their own taxonomy.
    #[must_use]
    pub const fn with_config(vocab: Vocabulary, weights: ScoringWeights) -> Self {
        Self { vocab, weights }
    }

    /// Parse a document, closing open experience ranges at today's
    /// date.
    ///
    /// # Errors
    /// Returns [`resumelens_core::ResumeError::UnreadableDocument`] when
    /// text extraction fails outright. Field absence is never an error.
    pub fn parse(&self, doc: &RawDocument) -> Result<ParseOutcome> {
        self.parse_as_of(doc, resumelens_scoring::score::today())
    }

    /// Parse with an explicit reference date for open experience
    /// ranges. Deterministic: the same bytes and date always produce
    /// the same outcome.
    ///
    /// # Errors
    /// Same as [`ResumeParser::parse`].
    pub fn parse_as_of(&self, doc: &RawDocument, as_of: NaiveDate) -> Result<ParseOutcome> {
        let started = Instant::now();

        let extraction = resumelens_backend::extract_text(doc)?;
        let text_length = extraction.text.chars().count();

        let extractor = FieldExtractor::new(&self.vocab);
        let (candidates, warnings) = extractor.extract_fields(&extraction);

        let confidence = resumelens_scoring::estimate_confidence(&candidates);

        let categorizer = SkillCategorizer::new(&self.vocab);
        let fields = assemble::assemble(candidates, &categorizer);

        let mut resume = ParsedResume {
            personal: fields.personal,
            summary: fields.summary,
            experience: fields.experience,
            education: fields.education,
            skills: fields.skills,
            confidence,
            overall_score: 0,
            text_length,
        };
        resume.overall_score = resumelens_scoring::score(&resume, &self.weights, as_of);

        log::debug!(
            "parsed {} document in {:?}: score {}, {} warnings",
            doc.format,
            started.elapsed(),
            resume.overall_score,
            warnings.len()
        );
        Ok(ParseOutcome { resume, warnings })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resumelens_core::{InputFormat, ResumeError};

    #[test]
    fn test_empty_stream_is_unreadable() {
        let parser = ResumeParser::new();
        let doc = RawDocument {
            data: Vec::new(),
            format: InputFormat::Docx,
        };
        let err = parser.parse(&doc).unwrap_err();
        assert!(matches!(
            err,
            ResumeError::UnreadableDocument {
                format: InputFormat::Docx,
                ..
            }
        ));
    }
}
