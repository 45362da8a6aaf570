//! Skill taxonomy: category name -> canonical skill names

use crate::error::{ParserError, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Immutable mapping from skill category to canonical skill names.
///
/// Every skill name belongs to exactly one category (compared
/// case-insensitively). Category declaration order is preserved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillTaxonomy {
    categories: Vec<SkillCategory>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct TaxonomyFile {
    #[serde(default)]
    category: Vec<SkillCategory>,
}

impl SkillTaxonomy {
    /// Build a taxonomy, rejecting ambiguous categorization.
    pub fn new(categories: Vec<SkillCategory>) -> Result<Self> {
        let mut owner: HashMap<String, String> = HashMap::new();
        let mut cleaned = Vec::with_capacity(categories.len());

        for category in categories {
            let name = category.name.trim().to_string();
            if name.is_empty() {
                return Err(ParserError::Configuration(
                    "Taxonomy category with empty name".to_string(),
                ));
            }
            if cleaned.iter().any(|c: &SkillCategory| c.name.eq_ignore_ascii_case(&name)) {
                return Err(ParserError::Configuration(format!(
                    "Taxonomy category '{}' declared twice",
                    name
                )));
            }

            let mut skills = Vec::with_capacity(category.skills.len());
            for skill in category.skills {
                let skill = skill.trim().to_string();
                if skill.is_empty() {
                    continue;
                }

                let key = skill.to_lowercase();
                match owner.get(&key) {
                    Some(existing) if *existing == name => {
                        warn!("Skill '{}' listed twice in category '{}', keeping first", skill, name);
                    }
                    Some(existing) => {
                        return Err(ParserError::Configuration(format!(
                            "Skill '{}' appears in both '{}' and '{}'",
                            skill, existing, name
                        )));
                    }
                    None => {
                        owner.insert(key, name.clone());
                        skills.push(skill);
                    }
                }
            }

            cleaned.push(SkillCategory { name, skills });
        }

        Ok(Self { categories: cleaned })
    }

    /// Parse a TOML taxonomy made of `[[category]]` tables.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: TaxonomyFile = toml::from_str(content)?;
        Self::new(file.category)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let taxonomy = Self::from_toml_str(&content)?;
        info!(
            "Loaded taxonomy from {} ({} categories, {} skills)",
            path.display(),
            taxonomy.categories.len(),
            taxonomy.skill_count()
        );
        Ok(taxonomy)
    }

    /// The built-in technology and soft-skill taxonomy.
    pub fn builtin() -> Result<Self> {
        let table: &[(&str, &[&str])] = &[
            ("programming", &["Python", "Java", "JavaScript", "C++", "C#", "Go", "Rust", "Swift", "Kotlin", "TypeScript"]),
            ("web_dev", &["HTML", "CSS", "React", "Angular", "Vue", "Node.js", "Express", "Django", "Flask", "Spring"]),
            ("mobile", &["React Native", "Flutter", "Android", "iOS", "Xamarin"]),
            ("databases", &["SQL", "MySQL", "PostgreSQL", "MongoDB", "Redis", "Cassandra", "Oracle", "SQLite"]),
            ("cloud", &["AWS", "Azure", "GCP", "Docker", "Kubernetes", "Terraform", "Ansible", "CI/CD"]),
            ("data_science", &["R", "Pandas", "NumPy", "Scikit-learn", "TensorFlow", "PyTorch", "Tableau", "Power BI"]),
            ("ai_ml", &["Machine Learning", "Deep Learning", "NLP", "Computer Vision", "Reinforcement Learning", "MLOps"]),
            ("devops", &["Linux", "Bash", "Jenkins", "Prometheus", "Nginx"]),
            ("soft_skills", &["Communication", "Leadership", "Teamwork", "Problem-solving", "Critical Thinking", "Time Management"]),
            ("tools", &["Git", "JIRA", "Confluence", "Slack", "Figma", "VS Code", "IntelliJ", "Postman"]),
        ];

        Self::new(
            table
                .iter()
                .map(|(name, skills)| SkillCategory {
                    name: name.to_string(),
                    skills: skills.iter().map(|s| s.to_string()).collect(),
                })
                .collect(),
        )
    }

    pub fn categories(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name.as_str()).collect()
    }

    /// Skills declared under `category`; empty for unknown categories.
    pub fn skills_in(&self, category: &str) -> &[String] {
        self.categories
            .iter()
            .find(|c| c.name == category)
            .map(|c| c.skills.as_slice())
            .unwrap_or(&[])
    }

    /// Every `(skill, category)` pair in declaration order.
    pub fn all_skills(&self) -> Vec<(&str, &str)> {
        self.categories
            .iter()
            .flat_map(|c| c.skills.iter().map(move |s| (s.as_str(), c.name.as_str())))
            .collect()
    }

    pub fn category_of(&self, skill: &str) -> Option<&str> {
        self.categories
            .iter()
            .find(|c| c.skills.iter().any(|s| s.eq_ignore_ascii_case(skill)))
            .map(|c| c.name.as_str())
    }

    pub fn skill_count(&self) -> usize {
        self.categories.iter().map(|c| c.skills.len()).sum()
    }
}
