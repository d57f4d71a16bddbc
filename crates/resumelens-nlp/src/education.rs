//! Education entry extraction.
//!
//! Education sections are split into entry blocks at blank lines; a
//! block without a blank-line separator is treated as one entry. Within
//! a block, degree and institution lines are found by keyword, the last
//! four-digit year becomes the graduation year, and a `GPA:` value is
//! captured when present.

use crate::patterns;
use crate::sections::{self, Section};
use crate::BlockLineMap;
use resumelens_core::{
    DegreeLevel, EducationEntry, ExtractionMethod, FieldCandidate, FieldValue, SectionKind,
};

const INSTITUTION_KEYWORDS: [&str; 5] =
    ["university", "college", "school", "institute", "academy"];

/// Classify the degree level from a degree line.
#[must_use]
pub fn degree_level(line: &str) -> DegreeLevel {
    let lower = line.to_lowercase();
    if lower.contains("phd") || lower.contains("ph.d") || lower.contains("doctor") {
        DegreeLevel::Doctorate
    } else if lower.contains("master") || lower.contains("mba") || lower.contains("m.s") {
        DegreeLevel::Masters
    } else if lower.contains("bachelor") || lower.contains("b.s") || lower.contains("b.a") {
        DegreeLevel::Bachelors
    } else if lower.contains("associate") {
        DegreeLevel::Associate
    } else if lower.contains("diploma") || lower.contains("certificate") {
        DegreeLevel::Certificate
    } else {
        DegreeLevel::Unknown
    }
}

fn is_degree_line(line: &str) -> bool {
    degree_level(line) != DegreeLevel::Unknown || line.to_lowercase().contains("degree")
}

fn is_institution_line(line: &str) -> bool {
    let lower = line.to_lowercase();
    INSTITUTION_KEYWORDS.iter().any(|k| lower.contains(k))
}

/// Extract education entry candidates from all education sections.
#[must_use]
pub fn extract_education(
    sectioned: &[Section],
    map: &BlockLineMap,
) -> Vec<FieldCandidate> {
    let mut candidates = Vec::new();

    for section in sections::of_kind(sectioned, SectionKind::Education) {
        for block in split_blocks(&section.lines) {
            let mut entry = EducationEntry::default();
            let mut source_lines = Vec::new();

            for (line_idx, text) in &block {
                if entry.degree.is_empty() && is_degree_line(text) {
                    entry.degree = text.clone();
                    entry.level = degree_level(text);
                    source_lines.push(*line_idx);
                } else if entry.institution.is_empty() && is_institution_line(text) {
                    entry.institution = text.clone();
                    source_lines.push(*line_idx);
                }
                if entry.gpa.is_none() {
                    if let Some(caps) = patterns::GPA.captures(text) {
                        entry.gpa = caps[1].parse().ok();
                    }
                }
            }
            // Latest year in the block wins, matching how resumes list
            // a range of attendance years.
            for (_, text) in &block {
                if let Some(m) = patterns::YEAR.find_iter(text).last() {
                    entry.graduation_year = m.as_str().parse().ok();
                }
            }

            if entry.degree.is_empty() && entry.institution.is_empty() {
                continue;
            }
            candidates.push(FieldCandidate::new(
                FieldValue::Education(entry),
                map.blocks_for(source_lines),
                ExtractionMethod::Heuristic,
            ));
        }
    }
    candidates
}

/// Split section lines into blocks at blank lines; additionally start a
/// new block at a degree-keyword line when no blank separators exist,
/// so compact DOCX layouts still yield one entry per degree.
fn split_blocks(lines: &[(usize, String)]) -> Vec<Vec<(usize, String)>> {
    let has_blank = lines.iter().any(|(_, t)| t.is_empty());
    let mut blocks: Vec<Vec<(usize, String)>> = Vec::new();
    let mut current: Vec<(usize, String)> = Vec::new();

    for (idx, text) in lines {
        let boundary = if has_blank {
            text.is_empty()
        } else {
            degree_level(text) != DegreeLevel::Unknown && !current.is_empty()
        };
        if boundary {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
            if has_blank {
                continue;
            }
        }
        if !text.is_empty() {
            current.push((*idx, text.clone()));
        }
    }
    if !current.is_empty() {
        blocks.push(current);
    }
    blocks
}
