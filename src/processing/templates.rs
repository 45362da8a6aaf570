//! Role templates and plain-text job description rendering

use crate::processing::types::{JobAnalysis, NOT_SPECIFIED};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobTemplate {
    pub title: &'static str,
    pub required_skills: &'static [&'static str],
    pub experience: &'static str,
    pub responsibilities: &'static [&'static str],
}

pub const TEMPLATES: &[JobTemplate] = &[
    JobTemplate {
        title: "Software Engineer",
        required_skills: &["Python", "Java", "SQL", "Git", "Problem-solving"],
        experience: "2+ years",
        responsibilities: &[
            "Design, develop and maintain software applications",
            "Write clean, efficient, and well-documented code",
            "Collaborate with cross-functional teams",
            "Participate in code reviews",
        ],
    },
    JobTemplate {
        title: "Data Scientist",
        required_skills: &["Python", "SQL", "Machine Learning", "Pandas", "Tableau"],
        experience: "3+ years",
        responsibilities: &[
            "Analyze large datasets to extract insights",
            "Build and deploy machine learning models",
            "Create data visualizations and reports",
            "Collaborate with business teams",
        ],
    },
    JobTemplate {
        title: "DevOps Engineer",
        required_skills: &["AWS", "Docker", "Kubernetes", "CI/CD", "Linux"],
        experience: "2+ years",
        responsibilities: &[
            "Design and implement CI/CD pipelines",
            "Manage cloud infrastructure",
            "Ensure system reliability and scalability",
            "Implement monitoring and logging",
        ],
    },
];

pub fn template_names() -> Vec<&'static str> {
    TEMPLATES.iter().map(|t| t.title).collect()
}

/// Case-insensitive template lookup by title.
pub fn template(name: &str) -> Option<&'static JobTemplate> {
    let name = name.trim();
    TEMPLATES.iter().find(|t| t.title.eq_ignore_ascii_case(name))
}

impl JobTemplate {
    /// Render the template as a job posting the extractor can read back.
    pub fn to_job_text(&self) -> String {
        let mut text = String::new();
        text.push_str(&format!("{}\n", self.title));
        text.push('\n');
        text.push_str(&format!("We are looking for an experienced {} to join our team.\n", self.title));
        text.push('\n');
        text.push_str("Responsibilities:\n");
        for responsibility in self.responsibilities {
            text.push_str(&format!("- You will {}.\n", lowercase_first(responsibility)));
        }
        text.push('\n');
        text.push_str("Requirements:\n");
        text.push_str(&format!("- {} of experience is required.\n", self.experience));
        text.push_str(&format!("- Strong skills in {} are required.\n", self.required_skills.join(", ")));
        text
    }
}

/// Rewrite an analyzed posting into a clean, uniformly structured
/// description.
pub fn render_optimized_description(analysis: &JobAnalysis) -> String {
    let extraction = &analysis.extraction;
    let title = if extraction.job_title == NOT_SPECIFIED {
        "Position"
    } else {
        extraction.job_title.as_str()
    };

    let mut out = String::new();
    out.push_str(&format!("{}\n", title));
    out.push('\n');
    out.push_str("About the Role:\n");
    out.push_str(&format!(
        "We are looking for a talented {} to join our team and make a significant impact.\n",
        title
    ));

    if !extraction.responsibilities.is_empty() {
        out.push('\n');
        out.push_str("Key Responsibilities:\n");
        for responsibility in extraction.responsibilities.iter().take(5) {
            out.push_str(&format!("- {}\n", responsibility));
        }
    }

    out.push('\n');
    out.push_str("Requirements:\n");
    let experience = extraction
        .experience_phrases
        .first()
        .map(String::as_str)
        .unwrap_or("Experience in a relevant field");
    out.push_str(&format!("- {}\n", experience));
    out.push_str("- Relevant educational background\n");

    let skills: Vec<&str> = extraction.skill_names().into_iter().take(8).collect();
    if !skills.is_empty() {
        out.push_str(&format!("- Strong skills in: {}\n", skills.join(", ")));
    }
    out.push_str("- Excellent problem-solving and communication skills\n");

    let location = if extraction.location == NOT_SPECIFIED {
        "Multiple locations available"
    } else {
        extraction.location.as_str()
    };
    out.push('\n');
    out.push_str(&format!("Location: {}\n", location));
    if extraction.salary_range != NOT_SPECIFIED {
        out.push_str(&format!("Salary: {}\n", extraction.salary_range));
    }

    out
}

fn lowercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::types::{ExtractionResult, SkillGroup};

    #[test]
    fn test_template_lookup() {
        assert_eq!(template_names(), vec!["Software Engineer", "Data Scientist", "DevOps Engineer"]);
        assert_eq!(template("devops engineer").map(|t| t.title), Some("DevOps Engineer"));
        assert!(template("Astronaut").is_none());
    }

    #[test]
    fn test_job_text_shape() {
        let text = template("Software Engineer").unwrap().to_job_text();
        assert!(text.starts_with("Software Engineer\n"));
        assert!(text.contains("- You will design, develop and maintain software applications."));
        assert!(text.contains("- 2+ years of experience is required."));
    }

    #[test]
    fn test_render_with_sentinels() {
        let analysis = JobAnalysis {
            extraction: ExtractionResult::default(),
            complexity_score: 0,
            ats_keywords: vec![],
        };
        let text = render_optimized_description(&analysis);
        assert!(text.starts_with("Position\n"));
        assert!(text.contains("- Experience in a relevant field"));
        assert!(text.contains("Location: Multiple locations available"));
        assert!(!text.contains("Salary:"));
        assert!(!text.contains(NOT_SPECIFIED));
    }

    #[test]
    fn test_render_limits_lists() {
        let names: Vec<String> = (0..12).map(|i| format!("Skill{}", i)).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let analysis = JobAnalysis {
            extraction: ExtractionResult {
                skills: vec![SkillGroup::new("misc", &refs)],
                responsibilities: (0..8).map(|i| format!("Duty {}", i)).collect(),
                job_title: "Platform Engineer".to_string(),
                location: "Austin".to_string(),
                salary_range: "$120k-150k".to_string(),
                ..ExtractionResult::default()
            },
            complexity_score: 40,
            ats_keywords: vec![],
        };

        let text = render_optimized_description(&analysis);
        assert!(text.starts_with("Platform Engineer\n"));
        assert!(text.contains("- Duty 4\n"));
        assert!(!text.contains("Duty 5"));
        assert!(text.contains("Skill7"));
        assert!(!text.contains("Skill8"));
        assert!(text.contains("Location: Austin"));
        assert!(text.contains("Salary: $120k-150k"));
    }
}
