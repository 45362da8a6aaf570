//! Taxonomy skill matching with word-boundary checks

use crate::error::{ParserError, Result};
use crate::processing::types::MentionKind;
use crate::taxonomy::SkillTaxonomy;
use aho_corasick::{AhoCorasick, MatchKind};
use strsim::jaro_winkler;

/// Similarity above which a resume word is reported as a misspelling
/// of a missing skill.
const NEAR_MISS_THRESHOLD: f64 = 0.9;

/// One boundary-valid occurrence of a taxonomy skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillMention {
    pub skill_index: usize,
    pub start: usize,
    pub kind: MentionKind,
}

/// Case-insensitive multi-pattern matcher over every taxonomy skill
pub struct SkillMatcher {
    matcher: AhoCorasick,
    /// `(canonical name, category)` indexed by pattern id
    skills: Vec<(String, String)>,
}

impl SkillMatcher {
    pub fn new(taxonomy: &SkillTaxonomy) -> Result<Self> {
        let skills: Vec<(String, String)> = taxonomy
            .all_skills()
            .into_iter()
            .map(|(skill, category)| (skill.to_string(), category.to_string()))
            .collect();

        // Standard semantics so overlapping skills ("React" inside
        // "React Native") are each reported.
        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(MatchKind::Standard)
            .build(skills.iter().map(|(skill, _)| skill.as_str()))
            .map_err(|e| ParserError::Configuration(format!("Failed to build skill matcher: {}", e)))?;

        Ok(Self { matcher, skills })
    }

    pub fn skill(&self, index: usize) -> (&str, &str) {
        let (name, category) = &self.skills[index];
        (name.as_str(), category.as_str())
    }

    pub fn skill_count(&self) -> usize {
        self.skills.len()
    }

    /// All mentions in text order. A candidate glued to letters or digits
    /// on either side ("Go" in "Google") is rejected.
    pub fn find_mentions(&self, text: &str) -> Vec<SkillMention> {
        let mut mentions = Vec::new();

        for mat in self.matcher.find_overlapping_iter(text) {
            let (Some(before), Some(after)) = (text.get(..mat.start()), text.get(mat.end()..)) else {
                continue;
            };

            let prev = before.chars().next_back();
            let next = after.chars().next();
            if prev.is_some_and(is_word_char) || next.is_some_and(is_word_char) {
                continue;
            }

            let hyphen_before = prev == Some('-') && before[..before.len() - 1].chars().next_back().is_some_and(is_word_char);
            let hyphen_after = next == Some('-') && after[1..].chars().next().is_some_and(is_word_char);

            let (name, _) = &self.skills[mat.pattern().as_usize()];
            let kind = if hyphen_before || hyphen_after {
                MentionKind::Compound
            } else if name.contains(char::is_whitespace) {
                MentionKind::Phrase
            } else {
                MentionKind::Token
            };

            mentions.push(SkillMention {
                skill_index: mat.pattern().as_usize(),
                start: mat.start(),
                kind,
            });
        }

        mentions.sort_by_key(|m| (m.start, m.skill_index));
        mentions
    }

    /// Pairs of `(missing skill, resume word)` where the resume likely
    /// spells the skill differently.
    pub fn near_misses<'a>(&self, missing: &'a [String], words: &std::collections::HashSet<String>) -> Vec<(&'a str, String)> {
        let mut found = Vec::new();

        for skill in missing {
            let skill_lower = skill.to_lowercase();
            let best = words
                .iter()
                .filter(|w| **w != skill_lower)
                .map(|w| (w, jaro_winkler(w, &skill_lower)))
                .filter(|(_, score)| *score >= NEAR_MISS_THRESHOLD)
                .max_by(|a, b| a.1.total_cmp(&b.1).then_with(|| b.0.cmp(a.0)));

            if let Some((word, _)) = best {
                found.push((skill.as_str(), word.clone()));
            }
        }

        found
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn matcher() -> SkillMatcher {
        SkillMatcher::new(&SkillTaxonomy::builtin().unwrap()).unwrap()
    }

    fn found(matcher: &SkillMatcher, text: &str) -> Vec<(String, MentionKind)> {
        matcher
            .find_mentions(text)
            .into_iter()
            .map(|m| (matcher.skill(m.skill_index).0.to_string(), m.kind))
            .collect()
    }

    #[test]
    fn test_matcher_creation() {
        let matcher = matcher();
        assert!(matcher.skill_count() > 50);
    }

    #[test]
    fn test_word_boundaries() {
        let matcher = matcher();
        let mentions = found(&matcher, "Worked at Google on Javascripting and go.");
        assert_eq!(mentions, vec![("Go".to_string(), MentionKind::Token)]);
    }

    #[test]
    fn test_symbol_skills() {
        let matcher = matcher();
        let names: Vec<String> = found(&matcher, "Strong C++, C# and CI/CD skills; Node.js too")
            .into_iter()
            .map(|(n, _)| n)
            .collect();
        assert!(names.contains(&"C++".to_string()));
        assert!(names.contains(&"C#".to_string()));
        assert!(names.contains(&"CI/CD".to_string()));
        assert!(names.contains(&"Node.js".to_string()));
    }

    #[test]
    fn test_phrase_and_overlap() {
        let matcher = matcher();
        let mentions = found(&matcher, "Built apps in react native");
        assert!(mentions.contains(&("React Native".to_string(), MentionKind::Phrase)));
        assert!(mentions.contains(&("React".to_string(), MentionKind::Token)));
    }

    #[test]
    fn test_hyphenated_compound() {
        let matcher = matcher();
        let mentions = found(&matcher, "Python-based tooling");
        assert_eq!(mentions, vec![("Python".to_string(), MentionKind::Compound)]);
    }

    #[test]
    fn test_bullet_dash_is_not_compound() {
        let matcher = matcher();
        let mentions = found(&matcher, "- Python\n-Rust");
        assert_eq!(
            mentions,
            vec![
                ("Python".to_string(), MentionKind::Token),
                ("Rust".to_string(), MentionKind::Token)
            ]
        );
    }

    #[test]
    fn test_near_misses() {
        let matcher = matcher();
        let words: HashSet<String> = ["kubernetis", "cooking"].iter().map(|s| s.to_string()).collect();
        let missing = vec!["Kubernetes".to_string(), "Terraform".to_string()];
        let misses = matcher.near_misses(&missing, &words);
        assert_eq!(misses, vec![("Kubernetes", "kubernetis".to_string())]);
    }
}
