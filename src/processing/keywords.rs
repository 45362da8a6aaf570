//! ATS keyword list generation

use crate::processing::types::ExtractionResult;
use std::collections::HashSet;

/// Generic phrases recruiters' filters commonly look for.
pub const SOFT_SKILL_KEYWORDS: &[&str] = &[
    "team player",
    "problem solver",
    "detail oriented",
    "fast learner",
    "excellent communication",
    "leadership",
    "project management",
    "results driven",
    "self motivated",
    "critical thinking",
    "analytical skills",
    "creative",
    "adaptable",
    "reliable",
    "professional",
];

pub const DEFAULT_KEYWORD_CAP: usize = 20;

/// Extracted skill names followed by the soft-skill vocabulary,
/// deduplicated by exact string and truncated to `cap`.
pub fn generate_ats_keywords(result: &ExtractionResult, cap: usize) -> Vec<String> {
    let mut seen = HashSet::new();

    result
        .all_skills()
        .map(|s| s.name.as_str())
        .chain(SOFT_SKILL_KEYWORDS.iter().copied())
        .filter(|k| seen.insert(*k))
        .take(cap)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::types::SkillGroup;

    #[test]
    fn test_skills_come_first() {
        let result = ExtractionResult {
            skills: vec![SkillGroup::new("programming", &["Rust", "Go"])],
            ..ExtractionResult::default()
        };
        let keywords = generate_ats_keywords(&result, DEFAULT_KEYWORD_CAP);
        assert_eq!(&keywords[..3], &["Rust", "Go", "team player"]);
        assert_eq!(keywords.len(), 17);
    }

    #[test]
    fn test_cap_and_case_sensitive_dedup() {
        let names: Vec<String> = (0..10).map(|i| format!("Skill{}", i)).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let result = ExtractionResult {
            skills: vec![
                SkillGroup::new("a", &refs),
                SkillGroup::new("soft_skills", &["Leadership", "leadership"]),
            ],
            ..ExtractionResult::default()
        };

        let keywords = generate_ats_keywords(&result, DEFAULT_KEYWORD_CAP);
        assert_eq!(keywords.len(), 20);
        assert_eq!(keywords[10], "Leadership");
        assert_eq!(keywords[11], "leadership");
        assert_eq!(keywords.iter().filter(|k| *k == "leadership").count(), 1);
    }

    #[test]
    fn test_empty_result_yields_soft_skills() {
        let keywords = generate_ats_keywords(&ExtractionResult::default(), DEFAULT_KEYWORD_CAP);
        assert_eq!(keywords.len(), SOFT_SKILL_KEYWORDS.len());
    }
}
