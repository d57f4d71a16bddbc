//! Experience entry extraction.
//!
//! Within an experience section, date-range lines are the entry
//! boundaries. The up-to-two non-bullet lines immediately preceding a
//! date range become title and organization (positional heuristic);
//! lines after the range, up to the next entry's head, become the
//! description. A single head line of the form `Title at Company`,
//! `Title | Company`, or `Title - Company` is split instead.

use crate::patterns;
use crate::sections::{self, Section};
use crate::BlockLineMap;
use chrono::NaiveDate;
use resumelens_core::{
    ExperienceEntry, ExtractionMethod, FieldCandidate, FieldValue, ParseWarning, SectionKind,
};

/// A date range resolved from a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// First day of the start month.
    pub start: Option<NaiveDate>,
    /// First day of the end month; `None` when the range is open.
    pub end: Option<NaiveDate>,
    /// True for "Present" / "Current" ends.
    pub is_current: bool,
}

/// Parse the first date range on a line, month-name patterns first.
#[must_use]
pub fn parse_date_range(line: &str) -> Option<DateRange> {
    if let Some(caps) = patterns::DATE_RANGE_MONTH.captures(line) {
        let start_month = patterns::month_number(&caps["start_mon"])?;
        let start_year: i32 = caps["start_year"].parse().ok()?;
        let start = NaiveDate::from_ymd_opt(start_year, start_month, 1);
        let (end, is_current) = if caps.name("end_open").is_some() {
            (None, true)
        } else {
            let end_month = patterns::month_number(&caps["end_mon"])?;
            let end_year: i32 = caps["end_year"].parse().ok()?;
            (NaiveDate::from_ymd_opt(end_year, end_month, 1), false)
        };
        return Some(DateRange {
            start,
            end,
            is_current,
        });
    }
    if let Some(caps) = patterns::DATE_RANGE_YEAR.captures(line) {
        let start_year: i32 = caps["start_year"].parse().ok()?;
        // Year-only ranges resolve to January through December.
        let start = NaiveDate::from_ymd_opt(start_year, 1, 1);
        let (end, is_current) = if caps.name("end_open").is_some() {
            (None, true)
        } else {
            let end_year: i32 = caps["end_year"].parse().ok()?;
            (NaiveDate::from_ymd_opt(end_year, 12, 1), false)
        };
        return Some(DateRange {
            start,
            end,
            is_current,
        });
    }
    None
}

/// Extract experience entry candidates from all experience sections.
///
/// Entries missing the expected two-line title/organization head are
/// still emitted, with the gap reflected in a heuristic-fallback warning
/// and later in lowered confidence.
#[must_use]
pub fn extract_experience(
    sectioned: &[Section],
    map: &BlockLineMap,
    warnings: &mut Vec<ParseWarning>,
) -> Vec<FieldCandidate> {
    let mut candidates = Vec::new();
    let mut fallback_noted = false;

    for section in sections::of_kind(sectioned, SectionKind::Experience) {
        let lines = &section.lines;
        // Indices (into `lines`) of the date-range boundary lines.
        let boundaries: Vec<usize> = lines
            .iter()
            .enumerate()
            .filter(|(_, (_, text))| patterns::has_date_range(text))
            .map(|(i, _)| i)
            .collect();

        // Head of each entry: indices of the up-to-two non-bullet,
        // non-blank lines immediately before its date line, bounded by
        // the previous boundary. Computed up front so each entry's
        // description can run to the start of the next head.
        let heads: Vec<Vec<usize>> = boundaries
            .iter()
            .enumerate()
            .map(|(entry_no, &date_idx)| {
                let head_floor = if entry_no == 0 {
                    0
                } else {
                    boundaries[entry_no - 1] + 1
                };
                let mut head = Vec::new();
                for i in (head_floor..date_idx).rev() {
                    let (_, text) = &lines[i];
                    if text.is_empty() || patterns::BULLET.is_match(text) {
                        break;
                    }
                    head.push(i);
                    if head.len() == 2 {
                        break;
                    }
                }
                head.reverse();
                head
            })
            .collect();

        for (entry_no, &date_idx) in boundaries.iter().enumerate() {
            let (date_line_idx, date_text) = &lines[date_idx];
            let Some(range) = parse_date_range(date_text) else {
                continue;
            };

            let head: Vec<&(usize, String)> =
                heads[entry_no].iter().map(|&i| &lines[i]).collect();
            let (title, organization) = match head.as_slice() {
                [(_, only)] => split_title_line(only),
                [(_, first), (_, second)] => ((*first).clone(), (*second).clone()),
                _ => (String::new(), String::new()),
            };

            // Description: lines after the date range until the next
            // entry's head begins. Headless next entries fall back to
            // their date line.
            let desc_end = heads
                .get(entry_no + 1)
                .and_then(|h| h.first().copied())
                .unwrap_or_else(|| boundaries.get(entry_no + 1).copied().unwrap_or(lines.len()))
                .max(date_idx + 1);
            let description: Vec<&str> = lines[date_idx + 1..desc_end]
                .iter()
                .map(|(_, t)| t.as_str())
                .filter(|t| !t.is_empty() && !patterns::has_date_range(t))
                .collect();

            if organization.is_empty() && !fallback_noted {
                warnings.push(ParseWarning::HeuristicFallback {
                    group: "experience".to_string(),
                });
                fallback_noted = true;
            }

            let mut source_lines: Vec<usize> =
                head.iter().map(|(line, _)| *line).collect();
            source_lines.push(*date_line_idx);

            candidates.push(FieldCandidate::new(
                FieldValue::Experience(ExperienceEntry {
                    title,
                    organization,
                    start_date: range.start,
                    end_date: range.end,
                    is_current: range.is_current,
                    description: description.join("\n"),
                }),
                map.blocks_for(source_lines),
                ExtractionMethod::Heuristic,
            ));
        }
    }
    candidates
}

/// Split a single head line into title and organization on ` at `,
/// `|`, or ` - ` separators; otherwise the whole line is the title.
fn split_title_line(line: &str) -> (String, String) {
    for sep in [" | ", " at ", " - ", " @ "] {
        if let Some((title, org)) = line.split_once(sep) {
            return (title.trim().to_string(), org.trim().to_string());
        }
    }
    (line.trim().to_string(), String::new())
}
