//! Value objects produced by extraction and scoring

use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder for scalar fields the extractor could not find.
pub const NOT_SPECIFIED: &str = "Not Specified";

/// How a skill mention was found in the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MentionKind {
    /// Joined to a neighbouring word by a hyphen ("Python-based")
    Compound,
    /// Standalone single-word match
    Token,
    /// Multi-word skill matched as a whole phrase
    Phrase,
}

impl MentionKind {
    pub fn importance(self) -> f32 {
        match self {
            MentionKind::Compound => 0.5,
            MentionKind::Token => 1.0,
            MentionKind::Phrase => 1.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedSkill {
    pub name: String,
    pub category: String,
    pub importance: f32,
}

/// Skills found under one taxonomy category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub skills: Vec<ExtractedSkill>,
}

impl SkillGroup {
    /// Group of plain token-importance skills, handy for callers that
    /// already hold categorized skill names.
    pub fn new(category: &str, names: &[&str]) -> Self {
        Self {
            category: category.to_string(),
            skills: names
                .iter()
                .map(|name| ExtractedSkill {
                    name: name.to_string(),
                    category: category.to_string(),
                    importance: MentionKind::Token.importance(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub skills: Vec<SkillGroup>,
    pub experience_phrases: Vec<String>,
    pub education_phrases: Vec<String>,
    pub responsibilities: Vec<String>,
    pub requirements: Vec<String>,
    pub job_title: String,
    pub location: String,
    pub salary_range: String,
    pub company: String,
}

impl Default for ExtractionResult {
    fn default() -> Self {
        Self {
            skills: Vec::new(),
            experience_phrases: Vec::new(),
            education_phrases: Vec::new(),
            responsibilities: Vec::new(),
            requirements: Vec::new(),
            job_title: NOT_SPECIFIED.to_string(),
            location: NOT_SPECIFIED.to_string(),
            salary_range: NOT_SPECIFIED.to_string(),
            company: NOT_SPECIFIED.to_string(),
        }
    }
}

impl ExtractionResult {
    /// All skills in category order.
    pub fn all_skills(&self) -> impl Iterator<Item = &ExtractedSkill> {
        self.skills.iter().flat_map(|g| g.skills.iter())
    }

    pub fn skill_names(&self) -> Vec<&str> {
        self.all_skills().map(|s| s.name.as_str()).collect()
    }

    pub fn skill_count(&self) -> usize {
        self.skills.iter().map(|g| g.skills.len()).sum()
    }

    pub fn has_skill(&self, name: &str) -> bool {
        self.all_skills().any(|s| s.name.eq_ignore_ascii_case(name))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreLevel {
    Poor,
    Average,
    Good,
    Excellent,
}

impl fmt::Display for ScoreLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ScoreLevel::Poor => "Poor",
            ScoreLevel::Average => "Average",
            ScoreLevel::Good => "Good",
            ScoreLevel::Excellent => "Excellent",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub score: u32,
    pub level: ScoreLevel,
    pub feedback: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub match_score: f64,
    /// Capped at `scoring.match_list_cap`
    pub matched_skills: Vec<String>,
    /// Capped at `scoring.match_list_cap`
    pub missing_skills: Vec<String>,
    pub suggestions: Vec<String>,
    /// Counts before the list cap
    #[serde(default)]
    pub matched_total: usize,
    #[serde(default)]
    pub missing_total: usize,
}

/// Full job-description analysis: extraction plus derived scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobAnalysis {
    #[serde(flatten)]
    pub extraction: ExtractionResult,
    pub complexity_score: u32,
    pub ats_keywords: Vec<String>,
}
