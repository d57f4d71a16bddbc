//! Process-wide immutable configuration: vocabularies and scoring weights.
//!
//! These tables are loaded once at startup and injected by reference into
//! the extraction and scoring stages. Tests substitute reduced
//! vocabularies to exercise components in isolation.

use crate::record::DegreeLevel;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Word count above which a line is prose, never a heading.
const MAX_HEADING_WORDS: usize = 5;

/// Static vocabulary tables driving section segmentation, skill
/// recognition, and degree-level detection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    /// Category name to known skill tokens (lowercase).
    pub skill_categories: BTreeMap<String, Vec<String>>,
    /// Alias to canonical skill token (lowercase), e.g. `k8s` → `kubernetes`.
    pub skill_aliases: BTreeMap<String, String>,
    /// Heading keywords opening an experience section (lowercase).
    pub experience_headings: Vec<String>,
    /// Heading keywords opening an education section (lowercase).
    pub education_headings: Vec<String>,
    /// Heading keywords opening a skills section (lowercase).
    pub skills_headings: Vec<String>,
    /// Heading keywords opening a summary section (lowercase).
    pub summary_headings: Vec<String>,
    /// Maximum line length still considered a section heading.
    pub max_heading_len: usize,
    /// Lines from the top of the buffer in which the name is expected.
    pub name_scan_lines: usize,
    /// Minimum trimmed buffer length below which a low-content warning
    /// is emitted.
    pub min_text_length: usize,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

impl Default for Vocabulary {
    fn default() -> Self {
        let mut skill_categories = BTreeMap::new();
        skill_categories.insert(
            "programming".to_string(),
            strings(&[
                "python", "java", "javascript", "typescript", "c++", "c#", "php", "ruby", "go",
                "rust", "scala", "kotlin",
            ]),
        );
        skill_categories.insert(
            "web development".to_string(),
            strings(&[
                "html", "css", "react", "angular", "vue", "node.js", "express", "django", "flask",
                "laravel",
            ]),
        );
        skill_categories.insert(
            "databases".to_string(),
            strings(&[
                "mysql",
                "postgresql",
                "mongodb",
                "redis",
                "elasticsearch",
                "oracle",
                "sql server",
                "sqlite",
            ]),
        );
        skill_categories.insert(
            "cloud".to_string(),
            strings(&[
                "aws",
                "azure",
                "gcp",
                "docker",
                "kubernetes",
                "terraform",
                "jenkins",
                "ci/cd",
            ]),
        );
        skill_categories.insert(
            "data science".to_string(),
            strings(&[
                "pandas",
                "numpy",
                "scikit-learn",
                "tensorflow",
                "pytorch",
                "matplotlib",
                "seaborn",
                "jupyter",
            ]),
        );
        skill_categories.insert(
            "tools".to_string(),
            strings(&[
                "git",
                "jira",
                "confluence",
                "slack",
                "trello",
                "figma",
                "photoshop",
                "illustrator",
            ]),
        );

        let mut skill_aliases = BTreeMap::new();
        for (alias, canonical) in [
            ("golang", "go"),
            ("js", "javascript"),
            ("ts", "typescript"),
            ("k8s", "kubernetes"),
            ("postgres", "postgresql"),
            ("nodejs", "node.js"),
            ("node", "node.js"),
            ("sklearn", "scikit-learn"),
            ("tf", "tensorflow"),
        ] {
            skill_aliases.insert(alias.to_string(), canonical.to_string());
        }

        Self {
            skill_categories,
            skill_aliases,
            experience_headings: strings(&[
                "experience",
                "employment",
                "work history",
                "career",
                "professional background",
            ]),
            education_headings: strings(&[
                "education",
                "academic",
                "qualifications",
                "academic background",
            ]),
            skills_headings: strings(&[
                "skills",
                "technical skills",
                "competencies",
                "technologies",
            ]),
            summary_headings: strings(&["summary", "objective", "profile", "about", "overview"]),
            max_heading_len: 50,
            name_scan_lines: 5,
            min_text_length: 50,
        }
    }
}

impl Vocabulary {
    /// Whether a trimmed line is a section heading of any known kind.
    #[must_use]
    pub fn is_heading(&self, line: &str) -> bool {
        self.heading_kind(line).is_some()
    }

    /// Classify a trimmed line as a section heading, if it is one.
    ///
    /// Headings are short labels: sentence punctuation or more than a
    /// handful of words disqualifies a line even when it contains a
    /// section keyword, so prose like "a decade of experience." stays
    /// in its section's content.
    #[must_use]
    pub fn heading_kind(&self, line: &str) -> Option<SectionKind> {
        if line.len() > self.max_heading_len {
            return None;
        }
        if line.chars().any(|c| matches!(c, '.' | '!' | '?'))
            || line.split_whitespace().count() > MAX_HEADING_WORDS
        {
            return None;
        }
        let lower = line.to_lowercase();
        let matches = |keys: &[String]| keys.iter().any(|k| lower.contains(k.as_str()));
        if matches(&self.experience_headings) {
            Some(SectionKind::Experience)
        } else if matches(&self.education_headings) {
            Some(SectionKind::Education)
        } else if matches(&self.skills_headings) {
            Some(SectionKind::Skills)
        } else if matches(&self.summary_headings) {
            Some(SectionKind::Summary)
        } else {
            None
        }
    }
}

/// Kind of resume section a heading opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Experience,
    Education,
    Skills,
    Summary,
}

/// Fixed category weights for the scoring engine.
///
/// Each category is independently capped, then the capped sub-scores are
/// summed and clamped to `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Experience cap.
    pub experience_cap: u32,
    /// Months of experience per point: 3 months = 1 point, so 40 points
    /// saturate at ten years.
    pub months_per_point: u32,
    /// Education cap.
    pub education_cap: u32,
    /// Entries of the same degree level counted before further
    /// duplicates stop contributing.
    pub per_level_limit: usize,
    /// Skills cap.
    pub skills_cap: u32,
    /// Points per distinct categorized skill.
    pub points_per_skill: u32,
    /// Contact completeness cap.
    pub contact_cap: u32,
    /// Points for a present email.
    pub email_points: u32,
    /// Points for a present phone.
    pub phone_points: u32,
    /// Points for a present location.
    pub location_points: u32,
    /// Points for a present link.
    pub link_points: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            experience_cap: 40,
            months_per_point: 3,
            education_cap: 25,
            per_level_limit: 2,
            skills_cap: 25,
            points_per_skill: 2,
            contact_cap: 10,
            email_points: 4,
            phone_points: 3,
            location_points: 3,
            link_points: 2,
        }
    }
}

impl ScoringWeights {
    /// Points contributed by one education entry of the given level.
    #[must_use]
    pub const fn degree_points(level: DegreeLevel) -> u32 {
        match level {
            DegreeLevel::Doctorate => 12,
            DegreeLevel::Masters => 10,
            DegreeLevel::Bachelors => 8,
            DegreeLevel::Associate => 6,
            DegreeLevel::Certificate => 4,
            DegreeLevel::Unknown => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_vocabulary_has_six_skill_categories() {
        let vocab = Vocabulary::default();
        assert_eq!(vocab.skill_categories.len(), 6);
        assert!(vocab.skill_categories["programming"].contains(&"rust".to_string()));
    }

    #[test]
    fn test_heading_kind_classification() {
        let vocab = Vocabulary::default();
        assert_eq!(
            vocab.heading_kind("Work Experience"),
            Some(SectionKind::Experience)
        );
        assert_eq!(vocab.heading_kind("EDUCATION"), Some(SectionKind::Education));
        assert_eq!(
            vocab.heading_kind("Technical Skills"),
            Some(SectionKind::Skills)
        );
        assert_eq!(
            vocab.heading_kind("Professional Summary"),
            Some(SectionKind::Summary)
        );
        assert_eq!(vocab.heading_kind("Led a team of five engineers"), None);
    }

    #[test]
    fn test_prose_lines_with_keywords_are_not_headings() {
        let vocab = Vocabulary::default();
        // Short sentences containing section keywords stay prose.
        assert_eq!(
            vocab.heading_kind("Seasoned engineer with a decade of experience."),
            None
        );
        assert_eq!(vocab.heading_kind("all about my education over the years"), None);
        // Real headings are unaffected.
        assert_eq!(
            vocab.heading_kind("Work Experience"),
            Some(SectionKind::Experience)
        );
    }

    #[test]
    fn test_long_lines_are_not_headings() {
        let vocab = Vocabulary::default();
        let long = "experience building large distributed systems across multiple teams";
        assert!(long.len() > vocab.max_heading_len);
        assert_eq!(vocab.heading_kind(long), None);
    }

    #[test]
    fn test_degree_points_ranking() {
        assert!(
            ScoringWeights::degree_points(DegreeLevel::Doctorate)
                > ScoringWeights::degree_points(DegreeLevel::Masters)
        );
        assert!(
            ScoringWeights::degree_points(DegreeLevel::Masters)
                > ScoringWeights::degree_points(DegreeLevel::Bachelors)
        );
        assert!(
            ScoringWeights::degree_points(DegreeLevel::Unknown)
                < ScoringWeights::degree_points(DegreeLevel::Certificate)
        );
    }

    #[test]
    fn test_default_weights_cap_arithmetic() {
        let weights = ScoringWeights::default();
        // email + phone + location alone must reach the contact cap.
        assert_eq!(
            weights.email_points + weights.phone_points + weights.location_points,
            weights.contact_cap
        );
        assert_eq!(
            weights.experience_cap
                + weights.education_cap
                + weights.skills_cap
                + weights.contact_cap,
            100
        );
    }
}
