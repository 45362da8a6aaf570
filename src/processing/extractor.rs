//! Requirement and skill extraction from free text

use crate::config::LimitsConfig;
use crate::error::Result;
use crate::processing::patterns::{self, first_match};
use crate::processing::skill_matcher::SkillMatcher;
use crate::processing::text_processor::TextProcessor;
use crate::processing::types::{ExtractedSkill, ExtractionResult, SkillGroup, NOT_SPECIFIED};
use crate::taxonomy::SkillTaxonomy;
use log::debug;
use std::collections::HashMap;
use std::sync::Arc;

const EDUCATION_KEYWORDS: &[&str] = &[
    "bachelor", "btech", "master", "mtech", "mba", "phd", "doctorate",
    "degree", "diploma", "graduat", "qualif", "certif",
];

const RESPONSIBILITY_KEYWORDS: &[&str] = &[
    "responsible", "responsibilit", "duties", "role", "will", "must", "should", "requires to",
];

const REQUIREMENT_KEYWORDS: &[&str] = &[
    "requirement", "required", "must have", "should have", "need to have",
    "essential", "preferred", "qualif",
];

/// Scans text for taxonomy skills, experience phrases, sentence buckets
/// and scalar job fields.
pub struct Extractor {
    taxonomy: Arc<SkillTaxonomy>,
    matcher: SkillMatcher,
    processor: TextProcessor,
    limits: LimitsConfig,
}

impl Extractor {
    pub fn new(taxonomy: Arc<SkillTaxonomy>, limits: LimitsConfig) -> Result<Self> {
        let matcher = SkillMatcher::new(&taxonomy)?;
        Ok(Self {
            taxonomy,
            matcher,
            processor: TextProcessor::new(),
            limits,
        })
    }

    pub fn taxonomy(&self) -> &SkillTaxonomy {
        &self.taxonomy
    }

    pub fn matcher(&self) -> &SkillMatcher {
        &self.matcher
    }

    /// Extract every field from `text`. Never fails: anything not found
    /// comes back empty or as [`NOT_SPECIFIED`].
    pub fn extract(&self, text: &str) -> ExtractionResult {
        let text = self.processor.normalize_unicode(text);

        let result = ExtractionResult {
            skills: self.extract_skills(&text),
            experience_phrases: self.extract_experience(&text),
            education_phrases: self.processor.sentences_with_keywords(&text, EDUCATION_KEYWORDS, self.limits.max_education),
            responsibilities: self.processor.sentences_with_keywords(
                &text,
                RESPONSIBILITY_KEYWORDS,
                self.limits.max_responsibilities,
            ),
            requirements: self.processor.sentences_with_keywords(&text, REQUIREMENT_KEYWORDS, self.limits.max_requirements),
            job_title: field_or_sentinel(&patterns::JOB_TITLE, &text),
            location: field_or_sentinel(&patterns::LOCATION, &text),
            salary_range: field_or_sentinel(&patterns::SALARY, &text),
            company: field_or_sentinel(&patterns::COMPANY, &text),
        };

        debug!(
            "Extracted {} skills in {} categories, {} experience phrases, {} requirements",
            result.skill_count(),
            result.skills.len(),
            result.experience_phrases.len(),
            result.requirements.len()
        );

        result
    }

    /// Skills grouped by category in taxonomy order. Repeated mentions of
    /// one skill keep the highest importance seen.
    pub fn extract_skills(&self, text: &str) -> Vec<SkillGroup> {
        let mut best: HashMap<usize, f32> = HashMap::new();
        for mention in self.matcher.find_mentions(text) {
            let importance = mention.kind.importance();
            best.entry(mention.skill_index)
                .and_modify(|current| *current = current.max(importance))
                .or_insert(importance);
        }

        // Pattern ids follow `all_skills()` order, which is category order.
        let mut indices: Vec<usize> = best.keys().copied().collect();
        indices.sort_unstable();

        let mut groups: Vec<SkillGroup> = Vec::new();
        for index in indices {
            let (name, category) = self.matcher.skill(index);
            let skill = ExtractedSkill {
                name: name.to_string(),
                category: category.to_string(),
                importance: best[&index],
            };

            match groups.last_mut() {
                Some(group) if group.category == category => group.skills.push(skill),
                _ => groups.push(SkillGroup {
                    category: category.to_string(),
                    skills: vec![skill],
                }),
            }
        }

        groups
    }

    /// Duration phrases such as "3+ years of experience", deduplicated in
    /// order of first occurrence. A match nested inside a longer one
    /// ("5 years experience" within "3-5 years experience") is dropped.
    pub fn extract_experience(&self, text: &str) -> Vec<String> {
        // (start, end, decimal); decimal spans still shadow nested matches
        let mut spans: Vec<(usize, usize, bool)> = patterns::EXPERIENCE
            .iter()
            .flat_map(|re| re.captures_iter(text))
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                Some((whole.start(), whole.end(), caps.get(1).is_some()))
            })
            .collect();
        spans.sort_by(|a, b| a.0.cmp(&b.0).then(b.1.cmp(&a.1)));

        let mut phrases: Vec<String> = Vec::new();
        let mut covered_until = 0;
        for (start, end, decimal) in spans {
            if end <= covered_until {
                continue;
            }
            covered_until = end;
            if decimal {
                continue;
            }

            let phrase = &text[start..end];
            if !phrases.iter().any(|p| p == phrase) {
                phrases.push(phrase.to_string());
            }
        }

        phrases
    }
}

fn field_or_sentinel(patterns: &[patterns::FieldPattern], text: &str) -> String {
    first_match(patterns, text).unwrap_or_else(|| NOT_SPECIFIED.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::SkillCategory;

    const SCENARIO: &str = "We need a Python Developer with 3+ years of experience. Requirements: SQL, AWS. Bachelor's degree required.";

    fn extractor() -> Extractor {
        Extractor::new(Arc::new(SkillTaxonomy::builtin().unwrap()), LimitsConfig::default()).unwrap()
    }

    fn category_of<'a>(result: &'a ExtractionResult, skill: &str) -> Option<&'a str> {
        result
            .all_skills()
            .find(|s| s.name == skill)
            .map(|s| s.category.as_str())
    }

    #[test]
    fn test_scenario_job_post() {
        let result = extractor().extract(SCENARIO);

        assert_eq!(category_of(&result, "Python"), Some("programming"));
        assert_eq!(category_of(&result, "SQL"), Some("databases"));
        assert_eq!(category_of(&result, "AWS"), Some("cloud"));

        assert_eq!(result.experience_phrases, vec!["3+ years of experience"]);
        assert_eq!(result.education_phrases, vec!["Bachelor's degree required"]);
        assert!(result.requirements.iter().any(|r| r.starts_with("Requirements:")));
        assert_eq!(result.job_title, "Python Developer");
        assert_eq!(result.location, NOT_SPECIFIED);
        assert_eq!(result.salary_range, NOT_SPECIFIED);
        assert_eq!(result.company, NOT_SPECIFIED);
    }

    #[test]
    fn test_empty_text() {
        let result = extractor().extract("");
        assert_eq!(result, ExtractionResult::default());
    }

    #[test]
    fn test_whitespace_and_binary_looking_text() {
        let extractor = extractor();
        assert_eq!(extractor.extract("   \n\t  "), ExtractionResult::default());

        let noise = "\u{0}\u{1}\u{fffd}\u{7f}...!!??\u{0}";
        let result = extractor.extract(noise);
        assert!(result.skills.is_empty());
        assert_eq!(result.job_title, NOT_SPECIFIED);
    }

    #[test]
    fn test_skill_names_unique_and_merge_by_max() {
        let extractor = extractor();
        let result = extractor.extract("python, PYTHON, Python-based services and more Python");

        let pythons: Vec<&ExtractedSkill> = result.all_skills().filter(|s| s.name == "Python").collect();
        assert_eq!(pythons.len(), 1);
        assert_eq!(pythons[0].importance, 1.0);
    }

    #[test]
    fn test_phrase_importance() {
        let result = extractor().extract("Experience with machine learning pipelines");
        let ml = result.all_skills().find(|s| s.name == "Machine Learning").unwrap();
        assert_eq!(ml.importance, 1.5);
        assert_eq!(ml.category, "ai_ml");
    }

    #[test]
    fn test_groups_follow_taxonomy_order() {
        let result = extractor().extract("Git, Docker, Rust and PostgreSQL");
        let categories: Vec<&str> = result.skills.iter().map(|g| g.category.as_str()).collect();
        assert_eq!(categories, vec!["programming", "databases", "cloud", "tools"]);
    }

    #[test]
    fn test_experience_patterns() {
        let extractor = extractor();
        let text = "Needs 3-5 years experience. Also 2 yrs experience in Go. \
                    Experience of 4+ years preferred. 3-5 years experience again.";
        let phrases = extractor.extract_experience(text);
        assert_eq!(
            phrases,
            vec!["3-5 years experience", "2 yrs experience", "Experience of 4+ years"]
        );
    }

    #[test]
    fn test_bucket_caps() {
        let limits = LimitsConfig {
            max_requirements: 2,
            ..LimitsConfig::default()
        };
        let extractor = Extractor::new(Arc::new(SkillTaxonomy::builtin().unwrap()), limits).unwrap();
        let text = "Docker required. Git required. Linux required. Bash required.";
        let result = extractor.extract(text);
        assert_eq!(result.requirements, vec!["Docker required", "Git required"]);
    }

    #[test]
    fn test_default_education_and_responsibility_caps() {
        let extractor = extractor();

        let education: Vec<String> = (1..=7).map(|i| format!("Degree option {}", i)).collect();
        let result = extractor.extract(&education.join(". "));
        assert_eq!(result.education_phrases.len(), 5);
        assert_eq!(result.education_phrases, education[..5].to_vec());

        let duties: Vec<String> = (1..=12).map(|i| format!("You will own area {}", i)).collect();
        let result = extractor.extract(&duties.join(". "));
        assert_eq!(result.responsibilities.len(), 10);
        assert_eq!(result.responsibilities, duties[..10].to_vec());
    }

    #[test]
    fn test_decimal_years_are_not_whole_year_phrases() {
        let extractor = extractor();
        assert!(extractor.extract_experience("Needs 3.5 years of experience").is_empty());
        assert_eq!(
            extractor.extract_experience("Either 2.5-4 years experience or 4+ years of experience"),
            vec!["4+ years of experience"]
        );
        assert_eq!(extractor.extract_experience("Step 2. 5 years of experience"), vec!["5 years of experience"]);
    }

    #[test]
    fn test_custom_taxonomy() {
        let taxonomy = SkillTaxonomy::new(vec![SkillCategory {
            name: "embedded".to_string(),
            skills: vec!["RTOS".to_string(), "Embedded C".to_string()],
        }])
        .unwrap();
        let extractor = Extractor::new(Arc::new(taxonomy), LimitsConfig::default()).unwrap();

        let result = extractor.extract("Firmware in embedded c on an rtos");
        assert_eq!(result.skill_names(), vec!["RTOS", "Embedded C"]);
    }

    #[test]
    fn test_idempotent() {
        let extractor = extractor();
        let text = "Location: Pune. Salary: 10 - 15 LPA. Must have Kubernetes and Terraform.";
        assert_eq!(extractor.extract(text), extractor.extract(text));
    }
}
