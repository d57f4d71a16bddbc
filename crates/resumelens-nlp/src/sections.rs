//! Section segmentation via heading keyword detection.
//!
//! A best-effort classifier, not a guarantee: unusual headings fall
//! outside the keyword lists and their content lands in the preceding
//! (or preamble) section. Entry extraction only looks inside classified
//! sections; the skill collector alone falls back to whole-buffer
//! scanning.

use resumelens_core::{SectionKind, Vocabulary};

/// A contiguous run of buffer lines under one heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Classified heading kind; `None` for the unclassified preamble.
    pub kind: Option<SectionKind>,
    /// Heading line as written; empty for the preamble.
    pub heading: String,
    /// Content lines with their buffer line indices, blank lines kept
    /// (entry splitting relies on them).
    pub lines: Vec<(usize, String)>,
}

impl Section {
    /// Content joined back into one text blob.
    #[must_use]
    pub fn content(&self) -> String {
        self.lines
            .iter()
            .map(|(_, l)| l.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Split buffer lines into sections at heading lines.
///
/// Everything before the first heading becomes an unclassified preamble
/// section. Heading lines themselves are not part of section content.
#[must_use]
pub fn split_sections(lines: &[&str], vocab: &Vocabulary) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut current = Section {
        kind: None,
        heading: String::new(),
        lines: Vec::new(),
    };

    for (idx, raw) in lines.iter().enumerate() {
        let trimmed = raw.trim();
        if let Some(kind) = vocab.heading_kind(trimmed) {
            if !current.lines.is_empty() || !current.heading.is_empty() {
                sections.push(current);
            }
            current = Section {
                kind: Some(kind),
                heading: trimmed.to_string(),
                lines: Vec::new(),
            };
        } else {
            current.lines.push((idx, trimmed.to_string()));
        }
    }
    if !current.lines.is_empty() || !current.heading.is_empty() {
        sections.push(current);
    }
    sections
}

/// All sections of a given kind, in document order.
#[must_use]
pub fn of_kind(sections: &[Section], kind: SectionKind) -> Vec<&Section> {
    sections
        .iter()
        .filter(|s| s.kind == Some(kind))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_with_preamble() {
        let vocab = Vocabulary::default();
        let lines = vec![
            "Jane Doe",
            "jane@example.com",
            "Work Experience",
            "Engineer at Acme",
            "Education",
            "BS in CS",
        ];
        let sections = split_sections(&lines, &vocab);
        assert_eq!(sections.len(), 3);

        assert_eq!(sections[0].kind, None);
        assert_eq!(sections[0].lines.len(), 2);

        assert_eq!(sections[1].kind, Some(SectionKind::Experience));
        assert_eq!(sections[1].heading, "Work Experience");
        assert_eq!(sections[1].lines, vec![(3, "Engineer at Acme".to_string())]);

        assert_eq!(sections[2].kind, Some(SectionKind::Education));
    }

    #[test]
    fn test_blank_lines_preserved_in_content() {
        let vocab = Vocabulary::default();
        let lines = vec!["Education", "BS in CS", "", "MS in CS"];
        let sections = split_sections(&lines, &vocab);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].lines.len(), 3);
        assert_eq!(sections[0].lines[1].1, "");
    }

    #[test]
    fn test_of_kind_filters() {
        let vocab = Vocabulary::default();
        let lines = vec!["Skills", "Rust", "Experience", "Acme"];
        let sections = split_sections(&lines, &vocab);
        assert_eq!(of_kind(&sections, SectionKind::Skills).len(), 1);
        assert_eq!(of_kind(&sections, SectionKind::Experience).len(), 1);
        assert_eq!(of_kind(&sections, SectionKind::Education).len(), 0);
    }
}
