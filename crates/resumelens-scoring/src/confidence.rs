//! Per-group extraction confidence.
//!
//! Confidence starts from the strongest extraction method observed in a
//! group and loses 0.1 for each expected corroborating element the
//! extracted values lack. A group with at least one candidate never
//! drops below 0.1; a group with no candidates is exactly 0.0.

use resumelens_core::{ConfidenceMap, FieldCandidate, FieldKind, FieldValue};

/// Deduction applied per missing corroborating element.
const MISSING_ELEMENT_PENALTY: f64 = 0.1;

/// Floor for any group that produced at least one candidate.
const NON_EMPTY_FLOOR: f64 = 0.1;

/// Estimate per-group confidence from the raw candidate set.
///
/// Every group appears in the returned map; groups without candidates
/// carry exactly 0.0.
#[must_use]
pub fn estimate_confidence(candidates: &[FieldCandidate]) -> ConfidenceMap {
    let mut map = ConfidenceMap::new();
    map.insert("personal".to_string(), personal_confidence(candidates));
    map.insert("summary".to_string(), flat_confidence(candidates, FieldKind::Summary));
    map.insert("experience".to_string(), entry_confidence(candidates, FieldKind::ExperienceEntry));
    map.insert("education".to_string(), entry_confidence(candidates, FieldKind::EducationEntry));
    map.insert("skills".to_string(), flat_confidence(candidates, FieldKind::SkillToken));
    map
}

/// Strongest method base among candidates of the given kinds.
fn strongest_base(candidates: &[FieldCandidate], kinds: &[FieldKind]) -> Option<f64> {
    candidates
        .iter()
        .filter(|c| kinds.contains(&c.kind()))
        .map(|c| c.method.base_confidence())
        .reduce(f64::max)
}

/// Contact-block confidence: strongest base minus a penalty for each
/// absent member of {name, email, phone, location}.
fn personal_confidence(candidates: &[FieldCandidate]) -> f64 {
    const PERSONAL_KINDS: [FieldKind; 5] = [
        FieldKind::Name,
        FieldKind::Email,
        FieldKind::Phone,
        FieldKind::Location,
        FieldKind::Link,
    ];
    const EXPECTED: [FieldKind; 4] = [
        FieldKind::Name,
        FieldKind::Email,
        FieldKind::Phone,
        FieldKind::Location,
    ];
    let Some(base) = strongest_base(candidates, &PERSONAL_KINDS) else {
        return 0.0;
    };
    let missing = EXPECTED
        .iter()
        .filter(|kind| !candidates.iter().any(|c| c.kind() == **kind))
        .count();
    apply_penalty(base, missing)
}

/// Confidence for groups without corroborating elements: the strongest
/// base alone.
fn flat_confidence(candidates: &[FieldCandidate], kind: FieldKind) -> f64 {
    strongest_base(candidates, &[kind]).unwrap_or(0.0)
}

/// Mean per-entry confidence for experience/education groups, where
/// each entry is penalized for its own missing elements.
fn entry_confidence(candidates: &[FieldCandidate], kind: FieldKind) -> f64 {
    let entries: Vec<&FieldCandidate> =
        candidates.iter().filter(|c| c.kind() == kind).collect();
    if entries.is_empty() {
        return 0.0;
    }
    let sum: f64 = entries
        .iter()
        .map(|c| apply_penalty(c.method.base_confidence(), missing_elements(c)))
        .sum();
    sum / entries.len() as f64
}

/// Count of expected corroborating elements this entry lacks.
fn missing_elements(candidate: &FieldCandidate) -> usize {
    match &candidate.value {
        FieldValue::Experience(entry) => {
            let mut missing = 0;
            if entry.organization.is_empty() {
                missing += 1;
            }
            if entry.start_date.is_none() {
                missing += 1;
            }
            if entry.end_date.is_none() && !entry.is_current {
                missing += 1;
            }
            missing
        }
        FieldValue::Education(entry) => {
            let mut missing = 0;
            if entry.institution.is_empty() {
                missing += 1;
            }
            if entry.graduation_year.is_none() {
                missing += 1;
            }
            missing
        }
        _ => 0,
    }
}

fn apply_penalty(base: f64, missing: usize) -> f64 {
    (base - MISSING_ELEMENT_PENALTY * missing as f64).max(NON_EMPTY_FLOOR)
}
