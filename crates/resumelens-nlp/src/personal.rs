//! Contact-detail and summary candidate extraction.

use crate::ner;
use crate::patterns;
use crate::sections::{self, Section};
use crate::BlockLineMap;
use resumelens_core::{
    ExtractionMethod, FieldCandidate, FieldValue, ParseWarning, SectionKind, Vocabulary,
};

/// Extract name, email, phone, location, and link candidates.
#[must_use]
pub fn extract_personal(
    lines: &[&str],
    map: &BlockLineMap,
    vocab: &Vocabulary,
) -> Vec<FieldCandidate> {
    let mut candidates = Vec::new();

    // Name: first PERSON entity within the leading lines of the buffer.
    if let Some(person) = ner::leading_person(lines, vocab.name_scan_lines) {
        candidates.push(FieldCandidate::new(
            FieldValue::Name(person.text),
            map.blocks_for([person.line]),
            ExtractionMethod::Ner,
        ));
    }

    // Email: first structural match wins.
    if let Some((line_idx, m)) = first_match(lines, &patterns::EMAIL) {
        candidates.push(FieldCandidate::new(
            FieldValue::Email(m),
            map.blocks_for([line_idx]),
            ExtractionMethod::Pattern,
        ));
    }

    // Phone: ordered patterns; digits-only for storage, matched text as
    // the display value.
    'phone: for pattern in patterns::PHONE_PATTERNS.iter() {
        for (line_idx, line) in lines.iter().enumerate() {
            if let Some(m) = pattern.find(line) {
                let display = m.as_str().to_string();
                let digits: String = display.chars().filter(char::is_ascii_digit).collect();
                candidates.push(FieldCandidate::new(
                    FieldValue::Phone { digits, display },
                    map.blocks_for([line_idx]),
                    ExtractionMethod::Pattern,
                ));
                break 'phone;
            }
        }
    }

    // Location: first GPE/LOC entity anywhere in the buffer.
    if let Some(location) = ner::recognize(lines)
        .into_iter()
        .find(|e| e.label == ner::EntityLabel::Location)
    {
        candidates.push(FieldCandidate::new(
            FieldValue::Location(location.text),
            map.blocks_for([location.line]),
            ExtractionMethod::Ner,
        ));
    }

    // Links: LinkedIn first, then GitHub, then bare portfolio URLs.
    let mut seen = Vec::new();
    for pattern in [&patterns::LINKEDIN, &patterns::GITHUB, &patterns::URL] {
        for (line_idx, line) in lines.iter().enumerate() {
            for m in pattern.find_iter(line) {
                let link = m.as_str().trim_end_matches(['.', ',', ')']).to_string();
                let lower = link.to_lowercase();
                if seen.iter().any(|s: &String| lower.contains(s.as_str())) {
                    continue;
                }
                seen.push(lower);
                candidates.push(FieldCandidate::new(
                    FieldValue::Link(link),
                    map.blocks_for([line_idx]),
                    ExtractionMethod::Pattern,
                ));
            }
        }
    }

    candidates
}

/// Extract the professional summary.
///
/// Primary path: a summary-type section, lines collected until the next
/// blank line after content. Fallback: the first paragraph after the
/// contact block longer than 100 characters, which is positional and
/// emits a heuristic-fallback warning.
#[must_use]
pub fn extract_summary(
    lines: &[&str],
    sectioned: &[Section],
    map: &BlockLineMap,
    warnings: &mut Vec<ParseWarning>,
) -> Vec<FieldCandidate> {
    for section in sections::of_kind(sectioned, SectionKind::Summary) {
        let mut collected: Vec<(usize, &str)> = Vec::new();
        for (idx, line) in &section.lines {
            if line.is_empty() {
                if collected.is_empty() {
                    continue;
                }
                break;
            }
            collected.push((*idx, line.as_str()));
        }
        if !collected.is_empty() {
            let text = collected
                .iter()
                .map(|(_, l)| *l)
                .collect::<Vec<_>>()
                .join(" ");
            let block_lines: Vec<usize> = collected.iter().map(|(i, _)| *i).collect();
            return vec![FieldCandidate::new(
                FieldValue::Summary(text),
                map.blocks_for(block_lines),
                ExtractionMethod::Pattern,
            )];
        }
    }

    // Positional fallback: skip the first paragraph (usually the
    // name/contact block) and take the next substantial one.
    let joined = lines.join("\n");
    for para in joined.split("\n\n").skip(1).take(2) {
        let trimmed = para.trim();
        if trimmed.len() > 100 {
            warnings.push(ParseWarning::HeuristicFallback {
                group: "summary".to_string(),
            });
            let start_line: usize = joined[..joined.find(para).unwrap_or(0)]
                .matches('\n')
                .count();
            let line_count = trimmed.lines().count();
            return vec![FieldCandidate::new(
                FieldValue::Summary(trimmed.replace('\n', " ")),
                map.blocks_for(start_line..start_line + line_count),
                ExtractionMethod::Heuristic,
            )];
        }
    }
    Vec::new()
}

/// First match of a pattern across lines, with the line index.
fn first_match(lines: &[&str], pattern: &regex::Regex) -> Option<(usize, String)> {
    lines.iter().enumerate().find_map(|(idx, line)| {
        pattern
            .find(line)
            .map(|m| (idx, m.as_str().to_string()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::split_sections;
    use resumelens_core::{BlockOrigin, FieldKind, TextBlock};

    fn map_for(lines: &[&str]) -> BlockLineMap {
        let blocks: Vec<TextBlock> = lines
            .iter()
            .enumerate()
            .map(|(i, l)| TextBlock {
                id: i,
                origin: BlockOrigin::Paragraph,
                text: (*l).to_string(),
            })
            .collect();
        BlockLineMap::new(&blocks)
    }

    #[test]
    fn test_contact_extraction_shapes() {
        let lines = vec![
            "Jane Doe",
            "jane.doe@example.com",
            "(555) 123-4567",
            "New York, NY",
            "linkedin.com/in/janedoe",
        ];
        let vocab = Vocabulary::default();
        let candidates = extract_personal(&lines, &map_for(&lines), &vocab);

        let name = candidates
            .iter()
            .find(|c| c.kind() == FieldKind::Name)
            .unwrap();
        assert_eq!(name.value, FieldValue::Name("Jane Doe".to_string()));
        assert_eq!(name.method, ExtractionMethod::Ner);
        assert_eq!(name.source_blocks, vec![0]);

        let phone = candidates
            .iter()
            .find(|c| c.kind() == FieldKind::Phone)
            .unwrap();
        match &phone.value {
            FieldValue::Phone { digits, display } => {
                assert_eq!(digits, "5551234567");
                assert_eq!(display, "(555) 123-4567");
            }
            other => panic!("unexpected payload {other:?}"),
        }

        let link = candidates
            .iter()
            .find(|c| c.kind() == FieldKind::Link)
            .unwrap();
        assert_eq!(
            link.value,
            FieldValue::Link("linkedin.com/in/janedoe".to_string())
        );
    }

    #[test]
    fn test_us_dashed_phone_normalization() {
        let lines = vec!["Reach me at 555.123.4567 any time"];
        let vocab = Vocabulary::default();
        let candidates = extract_personal(&lines, &map_for(&lines), &vocab);
        let phone = candidates
            .iter()
            .find(|c| c.kind() == FieldKind::Phone)
            .unwrap();
        match &phone.value {
            FieldValue::Phone { digits, .. } => assert_eq!(digits, "5551234567"),
            other => panic!("unexpected payload {other:?}"),
        }
    }

    #[test]
    fn test_summary_from_section() {
        let lines = vec![
            "Professional Summary",
            "Seasoned engineer with a decade of experience.",
            "Focused on reliable data systems.",
            "",
            "Trailing text",
        ];
        let vocab = Vocabulary::default();
        let sectioned = split_sections(&lines, &vocab);
        let mut warnings = Vec::new();
        let candidates = extract_summary(&lines, &sectioned, &map_for(&lines), &mut warnings);

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].method, ExtractionMethod::Pattern);
        match &candidates[0].value {
            FieldValue::Summary(text) => {
                assert!(text.starts_with("Seasoned engineer"));
                assert!(text.ends_with("data systems."));
            }
            other => panic!("unexpected payload {other:?}"),
        }
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_summary_fallback_emits_warning() {
        let long_para = "A results-driven engineer who has shipped large distributed \
                         systems and led teams through ambiguous, high-stakes projects.";
        let lines = vec!["Jane Doe", "", long_para, "", "Experience"];
        let vocab = Vocabulary::default();
        let sectioned = split_sections(&lines, &vocab);
        let mut warnings = Vec::new();
        let candidates = extract_summary(&lines, &sectioned, &map_for(&lines), &mut warnings);

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].method, ExtractionMethod::Heuristic);
        assert_eq!(
            warnings,
            vec![ParseWarning::HeuristicFallback {
                group: "summary".to_string()
            }]
        );
    }
}
