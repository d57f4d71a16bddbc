//! Typed field candidates produced by the field extraction engine.
//!
//! A candidate is a proposed value for one structured field, tagged with
//! the blocks it came from and the method that produced it. Multiple
//! candidates may exist per kind; selection and merging happen later in
//! the pipeline.

use crate::record::{EducationEntry, ExperienceEntry};
use serde::{Deserialize, Serialize};

/// How a candidate value was extracted.
///
/// The confidence estimator assigns each method a fixed base reliability:
/// entity recognition 0.9, exact-pattern regex 0.85, positional
/// heuristic 0.6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionMethod {
    /// Named-entity recognition (PERSON / GPE-LOC).
    Ner,
    /// Exact-pattern regex match.
    Pattern,
    /// Positional heuristic (e.g. first line = title).
    Heuristic,
}

impl ExtractionMethod {
    /// Base confidence for values produced by this method.
    #[inline]
    #[must_use]
    pub const fn base_confidence(self) -> f64 {
        match self {
            Self::Ner => 0.9,
            Self::Pattern => 0.85,
            Self::Heuristic => 0.6,
        }
    }
}

/// The field kind a candidate proposes a value for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Name,
    Email,
    Phone,
    Location,
    Link,
    Summary,
    ExperienceEntry,
    EducationEntry,
    SkillToken,
}

/// Candidate payload, one variant shape per field kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldValue {
    /// Candidate person name.
    Name(String),
    /// Candidate email address, structurally validated only.
    Email(String),
    /// Candidate phone number.
    Phone {
        /// Digits-only normalized form, used for storage.
        digits: String,
        /// Original formatting, kept as the display value.
        display: String,
    },
    /// Candidate location, e.g. "New York, NY".
    Location(String),
    /// LinkedIn / portfolio link.
    Link(String),
    /// Professional summary text.
    Summary(String),
    /// Dated experience entry.
    Experience(ExperienceEntry),
    /// Education entry.
    Education(EducationEntry),
    /// Raw skill token prior to categorization.
    Skill(String),
}

impl FieldValue {
    /// The field kind this payload belongs to.
    #[must_use]
    pub const fn kind(&self) -> FieldKind {
        match self {
            Self::Name(_) => FieldKind::Name,
            Self::Email(_) => FieldKind::Email,
            Self::Phone { .. } => FieldKind::Phone,
            Self::Location(_) => FieldKind::Location,
            Self::Link(_) => FieldKind::Link,
            Self::Summary(_) => FieldKind::Summary,
            Self::Experience(_) => FieldKind::ExperienceEntry,
            Self::Education(_) => FieldKind::EducationEntry,
            Self::Skill(_) => FieldKind::SkillToken,
        }
    }
}

/// A single proposed value for a structured field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldCandidate {
    /// Typed payload.
    pub value: FieldValue,
    /// IDs of the text blocks the value was extracted from.
    pub source_blocks: Vec<usize>,
    /// Extraction method that produced the value.
    pub method: ExtractionMethod,
}

impl FieldCandidate {
    /// Create a candidate.
    #[must_use]
    pub fn new(value: FieldValue, source_blocks: Vec<usize>, method: ExtractionMethod) -> Self {
        Self {
            value,
            source_blocks,
            method,
        }
    }

    /// The field kind this candidate proposes a value for.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> FieldKind {
        self.value.kind()
    }
}
