//! The terminal `ParsedResume` aggregate and its nested entities.
//!
//! `ParsedResume` is the sole object crossing into external persistence
//! and export collaborators. It owns all nested entities exclusively and
//! is immutable once produced; the overall score is a pure function of
//! the other fields, so recomputing it from an unchanged record is
//! idempotent.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Contact details selected from field candidates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    /// Candidate name, preferred from the first PERSON entity near the
    /// top of the document.
    pub name: Option<String>,
    /// Email address, structurally validated.
    pub email: Option<String>,
    /// Phone number normalized to digits only.
    pub phone: Option<String>,
    /// Phone number with its original formatting, for display.
    pub phone_display: Option<String>,
    /// Location, e.g. "New York, NY".
    pub location: Option<String>,
    /// LinkedIn / portfolio links, in order of appearance.
    pub links: Vec<String>,
}

/// A single dated work-experience entry.
///
/// `end_date` absent together with `is_current = true` means an open
/// range ("Present"); both dates absent means the entry is undated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    /// Job title.
    pub title: String,
    /// Employer or organization.
    pub organization: String,
    /// Range start, resolved to the first day of the month.
    pub start_date: Option<NaiveDate>,
    /// Range end, resolved to the first day of the month; `None` for
    /// open or undated ranges.
    pub end_date: Option<NaiveDate>,
    /// True when the range is open ("Present" / "Current").
    pub is_current: bool,
    /// Free-text description lines.
    pub description: String,
}

/// Recognized degree level, ordered from highest to lowest.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum DegreeLevel {
    /// PhD / doctorate.
    Doctorate,
    /// Master's degree (incl. MBA).
    Masters,
    /// Bachelor's degree.
    Bachelors,
    /// Associate degree.
    Associate,
    /// Diploma or certificate program.
    Certificate,
    /// Degree text present but level unrecognized.
    #[default]
    Unknown,
}

/// A single education entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    /// Degree text as written, e.g. "Master of Science in CS".
    pub degree: String,
    /// Institution name.
    pub institution: String,
    /// Graduation year, when present.
    pub graduation_year: Option<i32>,
    /// GPA, when present.
    pub gpa: Option<f32>,
    /// Recognized degree level, drives level-weighted scoring.
    pub level: DegreeLevel,
}

/// Mapping from category name to the set of matched skill tokens.
///
/// Tokens are deduplicated and case-normalized; `BTreeMap`/`BTreeSet`
/// keep iteration deterministic for stable scoring and serialization.
pub type SkillSet = BTreeMap<String, BTreeSet<String>>;

/// Mapping from field group name ("personal", "experience", ...) to a
/// confidence value in `[0, 1]`.
pub type ConfidenceMap = BTreeMap<String, f64>;

/// The terminal aggregate handed to persistence/export collaborators.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedResume {
    /// Contact details.
    pub personal: PersonalInfo,
    /// Professional summary, when one was found.
    pub summary: Option<String>,
    /// Work experience in document order.
    pub experience: Vec<ExperienceEntry>,
    /// Education in document order.
    pub education: Vec<EducationEntry>,
    /// Categorized skills.
    pub skills: SkillSet,
    /// Per-group extraction confidence.
    pub confidence: ConfidenceMap,
    /// Weighted overall score in `[0, 100]`.
    pub overall_score: u8,
    /// Length of the extracted text buffer, in characters.
    pub text_length: usize,
}

impl ParsedResume {
    /// Count of distinct categorized skill tokens across all categories.
    #[must_use]
    pub fn distinct_skill_count(&self) -> usize {
        self.skills.values().map(BTreeSet::len).sum()
    }
}
