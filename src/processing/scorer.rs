//! Complexity, ATS and resume-vs-job match scoring

use crate::config::ScoringConfig;
use crate::processing::document::{ResumeFields, SectionType};
use crate::processing::types::{ExtractionResult, MatchResult, ScoreLevel, ScoreResult, SkillGroup};

/// Verbs that signal a measurable achievement in experience text.
const ACTION_VERBS: &[&str] = &["increased", "reduced", "improved", "achieved", "developed"];

const SUMMARY_MIN_CHARS: usize = 50;
const SUMMARY_MAX_CHARS: usize = 200;

/// How many missing skills get an individual suggestion.
const MAX_SKILL_SUGGESTIONS: usize = 5;

/// Job complexity from what the extractor found. Always in `0..=100`.
pub fn score_complexity(result: &ExtractionResult) -> u32 {
    let mut score = (result.skills.len() as u32 * 5).min(30);

    if !result.experience_phrases.is_empty() {
        score += 20;
    }
    if !result.education_phrases.is_empty() {
        score += 15;
    }
    score += (result.responsibilities.len() as u32 * 3).min(15);
    score += (result.requirements.len() as u32 * 2).min(10);

    score.min(100)
}

pub struct Scorer {
    config: ScoringConfig,
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

impl Scorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Map a 0-100 score onto the configured level thresholds.
    pub fn level_for(&self, score: u32) -> ScoreLevel {
        if score >= self.config.excellent {
            ScoreLevel::Excellent
        } else if score >= self.config.good {
            ScoreLevel::Good
        } else if score >= self.config.average {
            ScoreLevel::Average
        } else {
            ScoreLevel::Poor
        }
    }

    /// ATS compatibility of a resume's sections.
    pub fn score_ats(&self, resume: &ResumeFields) -> ScoreResult {
        let mut score = 0u32;
        let mut feedback = Vec::new();

        for section in [SectionType::Experience, SectionType::Education, SectionType::Skills] {
            if resume.has_section(section) {
                score += 20;
            } else {
                feedback.push(format!("Include a dedicated {} section", section));
            }
        }

        score += (resume.skills.len() as u32 * 2).min(30);

        let experience = resume.experience.as_deref().unwrap_or_default().to_lowercase();
        if ACTION_VERBS.iter().any(|verb| experience.contains(verb)) {
            score += 20;
        } else {
            feedback.push("Add more quantifiable achievements".to_string());
        }

        let summary_len = resume.summary.as_deref().map(|s| s.chars().count()).unwrap_or(0);
        if (SUMMARY_MIN_CHARS..SUMMARY_MAX_CHARS).contains(&summary_len) {
            score += 10;
        } else if summary_len < SUMMARY_MIN_CHARS {
            feedback.push(format!(
                "Expand the professional summary to at least {} characters",
                SUMMARY_MIN_CHARS
            ));
        } else {
            feedback.push(format!(
                "Shorten the professional summary to under {} characters",
                SUMMARY_MAX_CHARS
            ));
        }

        let score = score.min(100);
        ScoreResult {
            score,
            level: self.level_for(score),
            feedback,
        }
    }

    /// Compare resume skills against job skills, category by category.
    ///
    /// A job skill counts as matched only when the resume lists the same
    /// name under the same category.
    pub fn score_match(&self, resume: &[SkillGroup], job: &[SkillGroup]) -> MatchResult {
        let mut matched = Vec::new();
        let mut missing: Vec<(&str, &str)> = Vec::new();

        for group in job {
            let resume_group = resume.iter().find(|g| g.category == group.category);
            for skill in &group.skills {
                let present = resume_group
                    .is_some_and(|g| g.skills.iter().any(|s| s.name.eq_ignore_ascii_case(&skill.name)));
                if present {
                    matched.push(skill.name.as_str());
                } else {
                    missing.push((skill.name.as_str(), group.category.as_str()));
                }
            }
        }

        let total = matched.len() + missing.len();
        let match_score = if total == 0 {
            0.0
        } else {
            let raw = 100.0 * matched.len() as f64 / total as f64;
            (raw * 10.0).round() / 10.0
        };

        let suggestions = self.match_suggestions(match_score, total, &missing);
        let cap = self.config.match_list_cap;
        let matched_total = matched.len();
        let missing_total = missing.len();

        MatchResult {
            match_score,
            matched_total,
            missing_total,
            matched_skills: matched.into_iter().take(cap).map(str::to_string).collect(),
            missing_skills: missing.into_iter().take(cap).map(|(name, _)| name.to_string()).collect(),
            suggestions,
        }
    }

    fn match_suggestions(&self, match_score: f64, total: usize, missing: &[(&str, &str)]) -> Vec<String> {
        let mut suggestions = Vec::new();

        if total == 0 {
            suggestions.push("No recognizable skills found in the job description".to_string());
            return suggestions;
        }

        for (skill, category) in missing.iter().take(MAX_SKILL_SUGGESTIONS) {
            suggestions.push(format!(
                "Add {} ({}) to your resume if you have hands-on experience with it",
                skill,
                category.replace('_', " ")
            ));
        }

        if match_score >= f64::from(self.config.excellent) {
            suggestions.push("Strong skill alignment; list matched skills near the top of your resume".to_string());
        } else if match_score < f64::from(self.config.average) {
            suggestions.push("Skill overlap is low; tailor your resume to this role's requirements".to_string());
        }

        suggestions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::types::ExtractedSkill;

    #[test]
    fn test_complexity_weights() {
        let result = ExtractionResult {
            skills: vec![SkillGroup::new("a", &["x"]), SkillGroup::new("b", &["y"])],
            experience_phrases: vec!["3+ years experience".to_string()],
            education_phrases: vec![],
            responsibilities: vec!["r".to_string(); 2],
            requirements: vec!["q".to_string(); 3],
            ..ExtractionResult::default()
        };
        // 2*5 + 20 + 0 + 2*3 + 3*2
        assert_eq!(score_complexity(&result), 42);
    }

    #[test]
    fn test_complexity_caps() {
        let groups: Vec<SkillGroup> = (0..10).map(|i| SkillGroup::new(&format!("c{}", i), &["s"])).collect();
        let result = ExtractionResult {
            skills: groups,
            experience_phrases: vec!["x".to_string()],
            education_phrases: vec!["x".to_string()],
            responsibilities: vec!["r".to_string(); 10],
            requirements: vec!["q".to_string(); 10],
            ..ExtractionResult::default()
        };
        // 30 + 20 + 15 + 15 + 10
        assert_eq!(score_complexity(&result), 90);
        assert_eq!(score_complexity(&ExtractionResult::default()), 0);
    }

    #[test]
    fn test_level_thresholds() {
        let scorer = Scorer::default();
        assert_eq!(scorer.level_for(100), ScoreLevel::Excellent);
        assert_eq!(scorer.level_for(80), ScoreLevel::Excellent);
        assert_eq!(scorer.level_for(79), ScoreLevel::Good);
        assert_eq!(scorer.level_for(60), ScoreLevel::Good);
        assert_eq!(scorer.level_for(50), ScoreLevel::Average);
        assert_eq!(scorer.level_for(49), ScoreLevel::Poor);
    }

    #[test]
    fn test_ats_full_resume_clamps() {
        let resume = ResumeFields {
            summary: Some("Platform engineer with a decade of shipping reliable distributed systems.".to_string()),
            experience: Some("Reduced infrastructure cost by 30%".to_string()),
            education: Some("BSc Computer Science".to_string()),
            skills: (0..20).map(|i| format!("skill{}", i)).collect(),
        };
        let result = Scorer::default().score_ats(&resume);
        assert_eq!(result.score, 100);
        assert_eq!(result.level, ScoreLevel::Excellent);
        assert!(result.feedback.is_empty());
    }

    #[test]
    fn test_ats_empty_resume() {
        let result = Scorer::default().score_ats(&ResumeFields::default());
        assert_eq!(result.score, 0);
        assert_eq!(result.level, ScoreLevel::Poor);
        assert_eq!(
            result.feedback,
            vec![
                "Include a dedicated experience section".to_string(),
                "Include a dedicated education section".to_string(),
                "Include a dedicated skills section".to_string(),
                "Add more quantifiable achievements".to_string(),
                "Expand the professional summary to at least 50 characters".to_string(),
            ]
        );
    }

    #[test]
    fn test_ats_partial_resume() {
        let resume = ResumeFields {
            summary: Some("x".repeat(250)),
            experience: Some("Maintained legacy services".to_string()),
            education: None,
            skills: vec!["Rust".to_string(), "Go".to_string()],
        };
        let result = Scorer::default().score_ats(&resume);
        // experience + skills sections, 2 skills
        assert_eq!(result.score, 44);
        assert_eq!(result.level, ScoreLevel::Poor);
        assert!(result.feedback.contains(&"Add more quantifiable achievements".to_string()));
        assert!(result.feedback.iter().any(|f| f.starts_with("Shorten")));
    }

    #[test]
    fn test_ats_summary_length_is_taken_as_given() {
        let resume = ResumeFields {
            summary: Some(format!("  {}", "a".repeat(48))),
            ..ResumeFields::default()
        };
        let result = Scorer::default().score_ats(&resume);
        assert_eq!(result.score, 10);
        assert!(!result.feedback.iter().any(|f| f.contains("summary")));
    }

    #[test]
    fn test_match_scenario() {
        let resume = vec![SkillGroup::new("Programming", &["Python", "Java"])];
        let job = vec![SkillGroup::new("Programming", &["Python", "SQL"])];

        let result = Scorer::default().score_match(&resume, &job);
        assert_eq!(result.match_score, 50.0);
        assert_eq!(result.matched_skills, vec!["Python"]);
        assert_eq!(result.missing_skills, vec!["SQL"]);
        assert!(result.suggestions[0].contains("SQL"));
    }

    #[test]
    fn test_match_requires_same_category() {
        let resume = vec![SkillGroup::new("data_science", &["Python"])];
        let job = vec![SkillGroup::new("programming", &["Python"])];
        let result = Scorer::default().score_match(&resume, &job);
        assert_eq!(result.match_score, 0.0);
        assert_eq!(result.missing_skills, vec!["Python"]);
    }

    #[test]
    fn test_match_empty_is_zero() {
        let result = Scorer::default().score_match(&[], &[]);
        assert_eq!(result.match_score, 0.0);
        assert!(result.matched_skills.is_empty());
        assert!(result.missing_skills.is_empty());
    }

    #[test]
    fn test_match_self_is_hundred() {
        let groups = vec![
            SkillGroup::new("programming", &["Rust", "Go"]),
            SkillGroup::new("cloud", &["AWS"]),
        ];
        let result = Scorer::default().score_match(&groups, &groups);
        assert_eq!(result.match_score, 100.0);
        assert!(result.missing_skills.is_empty());
    }

    #[test]
    fn test_match_rounding_and_caps() {
        let job_names: Vec<String> = (0..15).map(|i| format!("S{}", i)).collect();
        let job_refs: Vec<&str> = job_names.iter().map(String::as_str).collect();
        let job = vec![SkillGroup::new("c", &job_refs)];
        let resume = vec![SkillGroup {
            category: "c".to_string(),
            skills: vec![ExtractedSkill {
                name: "s0".to_string(),
                category: "c".to_string(),
                importance: 1.0,
            }],
        }];

        let result = Scorer::default().score_match(&resume, &job);
        // 1 / 15 = 6.666..
        assert_eq!(result.match_score, 6.7);
        assert_eq!(result.matched_skills, vec!["S0"]);
        assert_eq!(result.missing_skills.len(), 10);
        assert_eq!(result.missing_skills[0], "S1");
        assert_eq!(result.matched_total, 1);
        assert_eq!(result.missing_total, 14);
    }
}
