//! # resumelens-core
//!
//! Shared types for the resume extraction-and-scoring pipeline:
//! the raw-document input model, extracted text blocks, typed field
//! candidates, the terminal [`ParsedResume`] aggregate, the error
//! taxonomy, and the injected read-only vocabulary configuration.
//!
//! All tables (skill taxonomy, heading keywords, scoring weights) live in
//! [`config`] as immutable values constructed once at startup and passed
//! down by reference; nothing in this crate holds mutable process state.

pub mod candidate;
pub mod config;
pub mod document;
pub mod error;
pub mod format;
pub mod record;
pub mod warning;

pub use candidate::{ExtractionMethod, FieldCandidate, FieldKind, FieldValue};
pub use config::{ScoringWeights, SectionKind, Vocabulary};
pub use document::{BlockOrigin, Extraction, RawDocument, TextBlock};
pub use error::{Result, ResumeError};
pub use format::InputFormat;
pub use record::{
    ConfidenceMap, DegreeLevel, EducationEntry, ExperienceEntry, ParsedResume, PersonalInfo,
    SkillSet,
};
pub use warning::ParseWarning;
