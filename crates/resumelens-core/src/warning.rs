//! Non-fatal warning codes accompanying a successful parse.

use serde::{Deserialize, Serialize};

/// A non-fatal condition observed while parsing.
///
/// Warnings ride the success channel; they never abort the pipeline.
/// Callers (e.g. a UI layer) decide whether to surface them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "code")]
pub enum ParseWarning {
    /// Extracted text is below the minimum length threshold; field
    /// candidates are best-effort and likely empty.
    LowContent {
        /// Length of the trimmed text buffer, in characters.
        length: usize,
    },
    /// A lower-confidence extraction path was used for a field group.
    /// Reflected in lowered confidence values; informational only.
    HeuristicFallback {
        /// Field group name, e.g. "experience" or "summary".
        group: String,
    },
}

impl std::fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LowContent { length } => {
                write!(f, "low content: extracted only {length} characters")
            }
            Self::HeuristicFallback { group } => {
                write!(f, "heuristic fallback used for group '{group}'")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let warning = ParseWarning::LowContent { length: 12 };
        assert_eq!(warning.to_string(), "low content: extracted only 12 characters");

        let warning = ParseWarning::HeuristicFallback {
            group: "experience".to_string(),
        };
        assert!(warning.to_string().contains("experience"));
    }

    #[test]
    fn test_serde_tagging() {
        let warning = ParseWarning::LowContent { length: 3 };
        let json = serde_json::to_string(&warning).unwrap();
        assert!(json.contains("\"code\":\"low_content\""));
    }
}
