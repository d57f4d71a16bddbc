//! Rule-based named-entity recognition.
//!
//! Recognizes two entity labels over the text buffer: PERSON and
//! GPE/LOC. The recognizer is deterministic keyword- and shape-based
//! (the pipeline deliberately carries no ML models): a PERSON is a short
//! run of capitalized words free of digits, emails, and URLs; a location
//! is a `City, ST` / `City, State` comma pattern.

use crate::patterns;

/// Entity label, restricted to the two types the pipeline consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityLabel {
    /// A person's name.
    Person,
    /// A geopolitical entity or location.
    Location,
}

/// A recognized entity with its buffer position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    /// Entity label.
    pub label: EntityLabel,
    /// Matched text.
    pub text: String,
    /// Buffer line the entity was found on.
    pub line: usize,
}

/// Recognize PERSON and GPE/LOC entities across all buffer lines.
#[must_use]
pub fn recognize(lines: &[&str]) -> Vec<Entity> {
    let mut entities = Vec::new();
    for (idx, raw) in lines.iter().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(name) = person_shape(line) {
            entities.push(Entity {
                label: EntityLabel::Person,
                text: name,
                line: idx,
            });
        }
        if let Some(caps) = patterns::CITY_STATE_ABBR
            .captures(line)
            .or_else(|| patterns::CITY_STATE_FULL.captures(line))
        {
            entities.push(Entity {
                label: EntityLabel::Location,
                text: format!("{}, {}", &caps[1], &caps[2]),
                line: idx,
            });
        }
    }
    entities
}

/// First PERSON entity found within the leading `scan_lines` lines.
///
/// Resumes conventionally place the candidate name first, so the
/// recognizer prefers an early match over a later, possibly spurious one
/// (e.g. a reference's name).
#[must_use]
pub fn leading_person(lines: &[&str], scan_lines: usize) -> Option<Entity> {
    let head = &lines[..lines.len().min(scan_lines)];
    recognize(head)
        .into_iter()
        .find(|e| e.label == EntityLabel::Person)
}

/// Check whether a whole line has the shape of a person name:
/// 2 to 4 words, every word capitalized, no digits, `@`, or URLs, and a
/// plausible total length.
fn person_shape(line: &str) -> Option<String> {
    if line.len() >= 50 {
        return None;
    }
    let lower = line.to_lowercase();
    if line.contains('@') || line.contains(|c: char| c.is_ascii_digit()) {
        return None;
    }
    if lower.contains("http") || lower.contains(".com") || lower.contains("www.") {
        return None;
    }
    let words: Vec<&str> = line.split_whitespace().collect();
    if !(2..=4).contains(&words.len()) {
        return None;
    }
    let name_like = words.iter().all(|w| {
        let mut chars = w.chars();
        let Some(first) = chars.next() else {
            return false;
        };
        first.is_uppercase()
            && w.chars()
                .all(|c| c.is_alphabetic() || c == '.' || c == '\'' || c == '-')
    });
    if name_like {
        Some(words.join(" "))
    } else {
        None
    }
}
