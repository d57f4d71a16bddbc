//! Weighted overall score.
//!
//! Four independently capped sub-scores (experience, education, skills,
//! contact completeness) are summed and clamped to `[0, 100]`. Every
//! input shape produces a score; an all-empty record scores 0. Open
//! experience ranges are closed against a caller-supplied reference
//! date, so the function stays pure.

use chrono::{Datelike, NaiveDate, Utc};
use resumelens_core::{
    DegreeLevel, EducationEntry, ExperienceEntry, ParsedResume, PersonalInfo, ScoringWeights,
    SkillSet,
};
use std::collections::BTreeMap;

/// The four capped sub-scores making up the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreBreakdown {
    /// Experience duration points, capped.
    pub experience: u32,
    /// Degree-level points, capped.
    pub education: u32,
    /// Distinct-skill points, capped.
    pub skills: u32,
    /// Contact completeness points, capped.
    pub contact: u32,
}

impl ScoreBreakdown {
    /// Sum of the capped sub-scores, clamped to `[0, 100]`.
    #[must_use]
    pub fn total(&self) -> u8 {
        let sum = self.experience + self.education + self.skills + self.contact;
        sum.min(100) as u8
    }
}

/// Compute the overall score for a record, closing open experience
/// ranges at `as_of`.
#[must_use]
pub fn score(resume: &ParsedResume, weights: &ScoringWeights, as_of: NaiveDate) -> u8 {
    score_breakdown(resume, weights, as_of).total()
}

/// Compute the per-category breakdown behind [`score`].
#[must_use]
pub fn score_breakdown(
    resume: &ParsedResume,
    weights: &ScoringWeights,
    as_of: NaiveDate,
) -> ScoreBreakdown {
    let breakdown = ScoreBreakdown {
        experience: experience_points(&resume.experience, weights, as_of),
        education: education_points(&resume.education, weights),
        skills: skill_points(&resume.skills, weights),
        contact: contact_points(&resume.personal, weights),
    };
    log::debug!(
        "scored experience={} education={} skills={} contact={} total={}",
        breakdown.experience,
        breakdown.education,
        breakdown.skills,
        breakdown.contact,
        breakdown.total()
    );
    breakdown
}

/// Today's date, for callers without a fixed reference date.
#[must_use]
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Index of a date's month on a continuous month axis.
fn month_index(date: NaiveDate) -> i64 {
    i64::from(date.year()) * 12 + i64::from(date.month0())
}

/// Total distinct months covered by the entries' date ranges.
///
/// Ranges are inclusive on both ends (Jan 2019 through Dec 2020 is 24
/// months). Overlapping ranges are merged so concurrent positions do
/// not double-count; disjoint ranges sum.
fn covered_months(entries: &[ExperienceEntry], as_of: NaiveDate) -> u32 {
    let mut intervals: Vec<(i64, i64)> = Vec::new();
    for entry in entries {
        let Some(start) = entry.start_date else {
            continue;
        };
        let end = match entry.end_date {
            Some(end) => end,
            None if entry.is_current => as_of,
            // Dated start with no end and no "Present" marker: count
            // the start month only.
            None => start,
        };
        let (s, e) = (month_index(start), month_index(end));
        if e >= s {
            intervals.push((s, e));
        }
    }
    intervals.sort_unstable();

    let mut total: i64 = 0;
    let mut current: Option<(i64, i64)> = None;
    for (s, e) in intervals {
        match current {
            Some((cs, ce)) if s <= ce => current = Some((cs, ce.max(e))),
            Some((cs, ce)) => {
                total += ce - cs + 1;
                current = Some((s, e));
            }
            None => current = Some((s, e)),
        }
    }
    if let Some((cs, ce)) = current {
        total += ce - cs + 1;
    }
    total.max(0) as u32
}

fn experience_points(
    entries: &[ExperienceEntry],
    weights: &ScoringWeights,
    as_of: NaiveDate,
) -> u32 {
    let months = covered_months(entries, as_of);
    (months / weights.months_per_point).min(weights.experience_cap)
}

fn education_points(entries: &[EducationEntry], weights: &ScoringWeights) -> u32 {
    let mut counted: BTreeMap<DegreeLevel, usize> = BTreeMap::new();
    let mut points = 0;
    for entry in entries {
        let seen = counted.entry(entry.level).or_insert(0);
        if *seen >= weights.per_level_limit {
            continue;
        }
        *seen += 1;
        points += ScoringWeights::degree_points(entry.level);
    }
    points.min(weights.education_cap)
}

fn skill_points(skills: &SkillSet, weights: &ScoringWeights) -> u32 {
    let distinct: usize = skills.values().map(std::collections::BTreeSet::len).sum();
    (distinct as u32 * weights.points_per_skill).min(weights.skills_cap)
}

fn contact_points(personal: &PersonalInfo, weights: &ScoringWeights) -> u32 {
    let mut points = 0;
    if personal.email.is_some() {
        points += weights.email_points;
    }
    if personal.phone.is_some() {
        points += weights.phone_points;
    }
    if personal.location.is_some() {
        points += weights.location_points;
    }
    if !personal.links.is_empty() {
        points += weights.link_points;
    }
    points.min(weights.contact_cap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn dated(start: NaiveDate, end: Option<NaiveDate>, current: bool) -> ExperienceEntry {
        ExperienceEntry {
            title: "Engineer".to_string(),
            organization: "Acme".to_string(),
            start_date: Some(start),
            end_date: end,
            is_current: current,
            description: String::new(),
        }
    }

    #[test]
    fn test_empty_record_scores_zero() {
        let resume = ParsedResume::default();
        assert_eq!(score(&resume, &ScoringWeights::default(), ymd(2026, 1, 1)), 0);
    }

    #[test]
    fn test_inclusive_month_counting() {
        let entries = vec![dated(ymd(2019, 1, 1), Some(ymd(2020, 12, 1)), false)];
        assert_eq!(covered_months(&entries, ymd(2026, 1, 1)), 24);
    }

    #[test]
    fn test_disjoint_ranges_sum_not_span() {
        // Jan 2019 - Dec 2020 plus Jan 2021 - Present (as of Dec 2022):
        // 24 + 24 months, not a single 48-month span with gaps.
        let entries = vec![
            dated(ymd(2019, 1, 1), Some(ymd(2020, 12, 1)), false),
            dated(ymd(2021, 1, 1), None, true),
        ];
        assert_eq!(covered_months(&entries, ymd(2022, 12, 15)), 48);

        // A gap year is not counted.
        let gapped = vec![
            dated(ymd(2018, 1, 1), Some(ymd(2018, 12, 1)), false),
            dated(ymd(2020, 1, 1), Some(ymd(2020, 12, 1)), false),
        ];
        assert_eq!(covered_months(&gapped, ymd(2026, 1, 1)), 24);
    }

    #[test]
    fn test_overlapping_ranges_merge() {
        let entries = vec![
            dated(ymd(2019, 1, 1), Some(ymd(2019, 12, 1)), false),
            dated(ymd(2019, 6, 1), Some(ymd(2020, 6, 1)), false),
        ];
        // Jan 2019 through Jun 2020 = 18 months.
        assert_eq!(covered_months(&entries, ymd(2026, 1, 1)), 18);
    }

    #[test]
    fn test_experience_caps_at_forty() {
        let weights = ScoringWeights::default();
        // Twenty years saturate the ten-year ceiling.
        let entries = vec![dated(ymd(2000, 1, 1), Some(ymd(2019, 12, 1)), false)];
        assert_eq!(experience_points(&entries, &weights, ymd(2026, 1, 1)), 40);
    }

    #[test]
    fn test_education_level_points_and_duplicate_limit() {
        let weights = ScoringWeights::default();
        let masters = EducationEntry {
            level: DegreeLevel::Masters,
            ..EducationEntry::default()
        };
        let entries = vec![masters.clone(), masters.clone(), masters];
        // Third Masters entry does not count: 10 + 10.
        assert_eq!(education_points(&entries, &weights), 20);

        let stacked = vec![
            EducationEntry {
                level: DegreeLevel::Doctorate,
                ..EducationEntry::default()
            },
            EducationEntry {
                level: DegreeLevel::Masters,
                ..EducationEntry::default()
            },
            EducationEntry {
                level: DegreeLevel::Bachelors,
                ..EducationEntry::default()
            },
        ];
        // 12 + 10 + 8 = 30, capped at 25.
        assert_eq!(education_points(&stacked, &weights), 25);
    }

    #[test]
    fn test_contact_without_link_reaches_cap() {
        let weights = ScoringWeights::default();
        let personal = PersonalInfo {
            name: Some("Jane Doe".to_string()),
            email: Some("jane.doe@example.com".to_string()),
            phone: Some("5551234567".to_string()),
            phone_display: Some("(555) 123-4567".to_string()),
            location: Some("New York, NY".to_string()),
            links: Vec::new(),
        };
        assert_eq!(contact_points(&personal, &weights), 10);

        let with_link = PersonalInfo {
            links: vec!["https://linkedin.com/in/janedoe".to_string()],
            ..personal
        };
        assert_eq!(contact_points(&with_link, &weights), 10);
    }

    #[test]
    fn test_skill_points() {
        let weights = ScoringWeights::default();
        let mut skills = SkillSet::new();
        skills.insert(
            "programming".to_string(),
            ["rust", "python", "go"].iter().map(|s| (*s).to_string()).collect(),
        );
        assert_eq!(skill_points(&skills, &weights), 6);

        let many: std::collections::BTreeSet<String> =
            (0..30).map(|i| format!("skill-{i}")).collect();
        skills.insert("tools".to_string(), many);
        assert_eq!(skill_points(&skills, &weights), 25);
    }

    #[test]
    fn test_score_is_idempotent() {
        let resume = ParsedResume {
            experience: vec![dated(ymd(2020, 1, 1), None, true)],
            ..ParsedResume::default()
        };
        let weights = ScoringWeights::default();
        let as_of = ymd(2026, 8, 1);
        let first = score(&resume, &weights, as_of);
        let second = score(&resume, &weights, as_of);
        assert_eq!(first, second);
    }

    proptest! {
        #[test]
        fn prop_score_stays_in_range(
            months in proptest::collection::vec((0i64..1200, 0i64..1200), 0..8),
            skills in 0usize..100,
            levels in proptest::collection::vec(0u8..6, 0..10),
        ) {
            let base = ymd(1970, 1, 1);
            let experience: Vec<ExperienceEntry> = months
                .iter()
                .map(|(a, b)| {
                    let (s, e) = (*a.min(b), *a.max(b));
                    dated(
                        base + chrono::Months::new(s as u32),
                        Some(base + chrono::Months::new(e as u32)),
                        false,
                    )
                })
                .collect();
            let education: Vec<EducationEntry> = levels
                .iter()
                .map(|l| EducationEntry {
                    level: match l {
                        0 => DegreeLevel::Doctorate,
                        1 => DegreeLevel::Masters,
                        2 => DegreeLevel::Bachelors,
                        3 => DegreeLevel::Associate,
                        4 => DegreeLevel::Certificate,
                        _ => DegreeLevel::Unknown,
                    },
                    ..EducationEntry::default()
                })
                .collect();
            let mut skill_set = SkillSet::new();
            skill_set.insert(
                "tools".to_string(),
                (0..skills).map(|i| format!("tool-{i}")).collect(),
            );
            let resume = ParsedResume {
                experience,
                education,
                skills: skill_set,
                ..ParsedResume::default()
            };
            let total = score(&resume, &ScoringWeights::default(), ymd(2080, 1, 1));
            prop_assert!(total <= 100);
        }
    }
}
