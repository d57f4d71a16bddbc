//! Skill token extraction and category assignment.
//!
//! Two extraction paths: when a skills section exists its content is
//! tokenized directly; otherwise the whole buffer is scanned for known
//! vocabulary tokens at word boundaries. Categorization maps raw tokens
//! through the alias table into the category vocabulary, dropping
//! anything unrecognized.

use crate::patterns::BULLET;
use crate::sections::{self, Section};
use crate::BlockLineMap;
use resumelens_core::{
    ExtractionMethod, FieldCandidate, FieldValue, SectionKind, SkillSet, Vocabulary,
};

/// Tokens at or above this length are discarded as prose fragments.
const MAX_TOKEN_LEN: usize = 50;

/// Extract raw skill token candidates from the buffer.
///
/// Section content is authoritative when present; the whole-buffer scan
/// is the fallback for resumes without an identifiable skills section.
#[must_use]
pub fn extract_skill_tokens(
    text: &str,
    sectioned: &[Section],
    map: &BlockLineMap,
    vocab: &Vocabulary,
) -> Vec<FieldCandidate> {
    let skills_sections = sections::of_kind(sectioned, SectionKind::Skills);
    if skills_sections.is_empty() {
        scan_buffer(text, map, vocab)
    } else {
        tokenize_sections(&skills_sections, map)
    }
}

fn tokenize_sections(skills_sections: &[&Section], map: &BlockLineMap) -> Vec<FieldCandidate> {
    let mut candidates = Vec::new();
    let mut seen: Vec<String> = Vec::new();
    for section in skills_sections {
        for (line_idx, line) in &section.lines {
            let stripped = BULLET.replace(line.trim(), "");
            for raw in stripped.split([',', ';']) {
                let token = raw.trim();
                if token.is_empty() || token.chars().count() >= MAX_TOKEN_LEN {
                    continue;
                }
                let lower = token.to_lowercase();
                // Residue of the heading itself sometimes leaks into
                // content, e.g. "Skills:" followed by a colon split.
                if lower.starts_with("skill") {
                    continue;
                }
                if seen.contains(&lower) {
                    continue;
                }
                seen.push(lower);
                candidates.push(FieldCandidate::new(
                    FieldValue::Skill(token.to_string()),
                    map.blocks_for([*line_idx]),
                    ExtractionMethod::Pattern,
                ));
            }
        }
    }
    candidates
}

/// Scan the whole lowercased buffer for known vocabulary tokens,
/// accepting a hit only when it sits at word boundaries on both sides.
fn scan_buffer(text: &str, map: &BlockLineMap, vocab: &Vocabulary) -> Vec<FieldCandidate> {
    let lower = text.to_lowercase();
    let mut candidates = Vec::new();
    let known = vocab
        .skill_categories
        .values()
        .flatten()
        .chain(vocab.skill_aliases.keys());
    for token in known {
        if let Some(pos) = first_bounded(&lower, token) {
            let line = lower[..pos].matches('\n').count();
            candidates.push(FieldCandidate::new(
                FieldValue::Skill(token.clone()),
                map.blocks_for([line]),
                ExtractionMethod::Pattern,
            ));
        }
    }
    candidates
}

/// First occurrence of `token` in `haystack` not flanked by
/// alphanumerics, so `go` never matches inside `django`.
fn first_bounded(haystack: &str, token: &str) -> Option<usize> {
    for (pos, _) in haystack.match_indices(token) {
        let before_ok = haystack[..pos]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let after_ok = haystack[pos + token.len()..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());
        if before_ok && after_ok {
            return Some(pos);
        }
    }
    None
}

/// Assigns raw skill tokens to vocabulary categories.
#[derive(Debug, Clone, Copy)]
pub struct SkillCategorizer<'a> {
    vocab: &'a Vocabulary,
}

impl<'a> SkillCategorizer<'a> {
    /// Create a categorizer over the given vocabulary.
    #[must_use]
    pub const fn new(vocab: &'a Vocabulary) -> Self {
        Self { vocab }
    }

    /// Canonical form of a raw token: lowercased, trimmed, and mapped
    /// through the alias table.
    #[must_use]
    pub fn canonicalize(&self, token: &str) -> String {
        let lower = token.trim().to_lowercase();
        match self.vocab.skill_aliases.get(&lower) {
            Some(canonical) => canonical.clone(),
            None => lower,
        }
    }

    /// Category holding the canonical token, if any.
    #[must_use]
    pub fn category_of(&self, canonical: &str) -> Option<&'a str> {
        self.vocab
            .skill_categories
            .iter()
            .find(|(_, tokens)| tokens.iter().any(|t| t == canonical))
            .map(|(name, _)| name.as_str())
    }

    /// Group raw tokens into the category map, dropping tokens that
    /// resolve to nothing in the vocabulary. Duplicate tokens collapse,
    /// so the operation is idempotent over its own output.
    #[must_use]
    pub fn categorize<I, S>(&self, tokens: I) -> SkillSet
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = SkillSet::new();
        for token in tokens {
            let canonical = self.canonicalize(token.as_ref());
            if canonical.is_empty() {
                continue;
            }
            if let Some(category) = self.category_of(&canonical) {
                set.entry(category.to_string())
                    .or_default()
                    .insert(canonical);
            } else {
                log::debug!("dropping uncategorized skill token: {canonical}");
            }
        }
        set
    }
}
