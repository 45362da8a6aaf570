//! Resume section detection

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SectionType {
    Summary,
    Experience,
    Education,
    Skills,
}

impl fmt::Display for SectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectionType::Summary => write!(f, "summary"),
            SectionType::Experience => write!(f, "experience"),
            SectionType::Education => write!(f, "education"),
            SectionType::Skills => write!(f, "skills"),
        }
    }
}

/// The resume sections ATS scoring looks at. Absent sections are `None`
/// (or an empty skill list).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeFields {
    pub summary: Option<String>,
    pub experience: Option<String>,
    pub education: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
}

impl ResumeFields {
    /// Split a plain-text resume on its heading lines.
    pub fn from_text(text: &str) -> Self {
        let mut fields = ResumeFields::default();
        let mut current: Option<SectionType> = None;
        let mut buffer: Vec<&str> = Vec::new();

        for line in text.lines() {
            if let Some((section, rest)) = detect_heading(line) {
                fields.store(current, &buffer);
                buffer.clear();
                current = Some(section);
                if !rest.is_empty() {
                    buffer.push(rest);
                }
            } else if current.is_some() {
                buffer.push(line);
            }
        }
        fields.store(current, &buffer);

        fields
    }

    pub fn has_section(&self, section: SectionType) -> bool {
        match section {
            SectionType::Summary => non_blank(&self.summary),
            SectionType::Experience => non_blank(&self.experience),
            SectionType::Education => non_blank(&self.education),
            SectionType::Skills => !self.skills.is_empty(),
        }
    }

    fn store(&mut self, section: Option<SectionType>, lines: &[&str]) {
        let Some(section) = section else {
            return;
        };

        let body = lines
            .iter()
            .map(|l| l.trim())
            .filter(|l| !l.is_empty())
            .collect::<Vec<_>>()
            .join("\n");
        if body.is_empty() {
            return;
        }

        let append = |slot: &mut Option<String>| {
            let existing = slot.get_or_insert_with(String::new);
            if !existing.is_empty() {
                existing.push('\n');
            }
            existing.push_str(&body);
        };

        match section {
            SectionType::Summary => append(&mut self.summary),
            SectionType::Experience => append(&mut self.experience),
            SectionType::Education => append(&mut self.education),
            SectionType::Skills => {
                for skill in split_skill_list(&body) {
                    if !self.skills.contains(&skill) {
                        self.skills.push(skill);
                    }
                }
            }
        }
    }
}

fn non_blank(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

/// Recognize a heading line, returning the section and any text that
/// follows a trailing colon on the same line.
fn detect_heading(line: &str) -> Option<(SectionType, &str)> {
    const HEADINGS: &[(SectionType, &[&str])] = &[
        (SectionType::Summary, &["summary", "professional summary", "profile", "objective", "about me"]),
        (
            SectionType::Experience,
            &["experience", "work experience", "professional experience", "employment", "employment history"],
        ),
        (SectionType::Education, &["education", "academic background", "qualifications"]),
        (SectionType::Skills, &["skills", "technical skills", "core competencies", "key skills"]),
    ];

    let trimmed = line.trim().trim_start_matches(['#', '*']).trim();
    let (head, rest) = match trimmed.split_once(':') {
        Some((head, rest)) => (head.trim(), rest.trim()),
        None => (trimmed, ""),
    };
    let head = head.trim_end_matches('*').trim().to_lowercase();

    HEADINGS
        .iter()
        .find(|(_, names)| names.contains(&head.as_str()))
        .map(|(section, _)| (*section, rest))
}

fn split_skill_list(body: &str) -> Vec<String> {
    body.split([',', ';', '|', '\n', '\u{2022}'])
        .map(|s| s.trim().trim_start_matches(['-', '*']).trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
