//! Candidate selection: collapse the raw candidate list into the final
//! record fields.
//!
//! Selection is first-wins for singular fields (candidates arrive in
//! extraction priority order) and order-preserving for repeated ones.

use resumelens_core::{
    EducationEntry, ExperienceEntry, FieldCandidate, FieldValue, PersonalInfo, SkillSet,
};
use resumelens_nlp::SkillCategorizer;

/// Record fields assembled from the candidate set, before confidence
/// and scoring are attached.
#[derive(Debug, Default)]
pub(crate) struct AssembledFields {
    pub personal: PersonalInfo,
    pub summary: Option<String>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: SkillSet,
}

pub(crate) fn assemble(
    candidates: Vec<FieldCandidate>,
    categorizer: &SkillCategorizer<'_>,
) -> AssembledFields {
    let mut fields = AssembledFields::default();
    let mut skill_tokens = Vec::new();

    for candidate in candidates {
        match candidate.value {
            FieldValue::Name(name) => {
                fields.personal.name.get_or_insert(name);
            }
            FieldValue::Email(email) => {
                fields.personal.email.get_or_insert(email);
            }
            FieldValue::Phone { digits, display } => {
                if fields.personal.phone.is_none() {
                    fields.personal.phone = Some(digits);
                    fields.personal.phone_display = Some(display);
                }
            }
            FieldValue::Location(location) => {
                fields.personal.location.get_or_insert(location);
            }
            FieldValue::Link(link) => fields.personal.links.push(link),
            FieldValue::Summary(summary) => {
                fields.summary.get_or_insert(summary);
            }
            FieldValue::Experience(entry) => fields.experience.push(entry),
            FieldValue::Education(entry) => fields.education.push(entry),
            FieldValue::Skill(token) => skill_tokens.push(token),
        }
    }

    fields.skills = categorizer.categorize(skill_tokens);
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use resumelens_core::{ExtractionMethod, Vocabulary};

    fn candidate(value: FieldValue) -> FieldCandidate {
        FieldCandidate::new(value, vec![0], ExtractionMethod::Pattern)
    }

    #[test]
    fn test_first_candidate_wins_for_singular_fields() {
        let vocab = Vocabulary::default();
        let categorizer = SkillCategorizer::new(&vocab);
        let fields = assemble(
            vec![
                candidate(FieldValue::Email("first@example.com".to_string())),
                candidate(FieldValue::Email("second@example.com".to_string())),
                candidate(FieldValue::Link("linkedin.com/in/a".to_string())),
                candidate(FieldValue::Link("github.com/a".to_string())),
            ],
            &categorizer,
        );
        assert_eq!(fields.personal.email.as_deref(), Some("first@example.com"));
        assert_eq!(fields.personal.links.len(), 2);
    }

    #[test]
    fn test_skill_tokens_are_categorized() {
        let vocab = Vocabulary::default();
        let categorizer = SkillCategorizer::new(&vocab);
        let fields = assemble(
            vec![
                candidate(FieldValue::Skill("Python".to_string())),
                candidate(FieldValue::Skill("k8s".to_string())),
                candidate(FieldValue::Skill("underwater basket weaving".to_string())),
            ],
            &categorizer,
        );
        assert!(fields.skills["programming"].contains("python"));
        assert!(fields.skills["cloud"].contains("kubernetes"));
        assert_eq!(fields.skills.len(), 2);
    }
}
