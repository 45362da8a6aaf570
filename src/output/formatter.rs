//! Output formatters: colored console, JSON and Markdown

use crate::config::OutputFormat;
use crate::error::{ParserError, Result};
use crate::output::report::*;
use crate::processing::{ExtractionResult, ScoreLevel, NOT_SPECIFIED};
use colored::{Color, Colorize};

/// Trait for rendering a report in one output format
pub trait OutputFormatter {
    fn format_report(&self, report: &Report) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
}

/// JSON formatter for scripting and export
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for sharing reports
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Picks the formatter for a requested format
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

impl ReportGenerator {
    pub fn new(use_colors: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
        }
    }

    pub fn generate(&self, report: &Report, format: OutputFormat) -> Result<String> {
        let formatter: &dyn OutputFormatter = match format {
            OutputFormat::Console => &self.console_formatter,
            OutputFormat::Json => &self.json_formatter,
            OutputFormat::Markdown => &self.markdown_formatter,
        };
        formatter.format_report(report)
    }
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn header(&self, title: &str) -> String {
        if self.use_colors {
            format!("\n{}\n", title.color(Color::Blue).bold())
        } else {
            format!("\n{}\n", title)
        }
    }

    fn level_badge(&self, level: ScoreLevel) -> String {
        let color = match level {
            ScoreLevel::Excellent => Color::Green,
            ScoreLevel::Good => Color::BrightGreen,
            ScoreLevel::Average => Color::Yellow,
            ScoreLevel::Poor => Color::Red,
        };
        format!("[{}]", self.colorize(&level.to_string().to_uppercase(), color))
    }

    fn percent(&self, score: f64) -> String {
        let color = if score >= 80.0 {
            Color::Green
        } else if score >= 50.0 {
            Color::Yellow
        } else {
            Color::Red
        };
        self.colorize(&format!("{:.1}%", score), color)
    }

    fn write_list(&self, out: &mut String, title: &str, items: &[String]) {
        if items.is_empty() {
            return;
        }
        out.push_str(&format!("{}\n", self.header(title).trim_end()));
        for item in items {
            out.push_str(&format!("  • {}\n", item));
        }
    }

    fn write_extraction(&self, out: &mut String, extraction: &ExtractionResult) {
        out.push_str(&format!("{}\n", self.header("📋 Job Details").trim_end()));
        for (label, value) in [
            ("Title", &extraction.job_title),
            ("Company", &extraction.company),
            ("Location", &extraction.location),
            ("Salary", &extraction.salary_range),
        ] {
            let shown = if value == NOT_SPECIFIED {
                self.colorize(value, Color::BrightBlack)
            } else {
                value.clone()
            };
            out.push_str(&format!("  • {}: {}\n", label, shown));
        }

        if !extraction.skills.is_empty() {
            out.push_str(&format!("{}\n", self.header("🔧 Skills").trim_end()));
            for group in &extraction.skills {
                let names: Vec<&str> = group.skills.iter().map(|s| s.name.as_str()).collect();
                out.push_str(&format!("  • {}: {}\n", self.colorize(&group.category, Color::Cyan), names.join(", ")));
            }
        }

        self.write_list(out, "⏳ Experience", &extraction.experience_phrases);
        self.write_list(out, "🎓 Education", &extraction.education_phrases);
        self.write_list(out, "📌 Responsibilities", &extraction.responsibilities);
        self.write_list(out, "✅ Requirements", &extraction.requirements);
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &Report) -> Result<String> {
        let mut out = String::new();

        match &report.body {
            ReportBody::Job(job) => {
                out.push_str(&format!("🔍 Job description analysis: {}\n", job.job_file));
                self.write_extraction(&mut out, &job.analysis.extraction);
                out.push_str(&format!("{}\n", self.header("📊 Scores").trim_end()));
                out.push_str(&format!("  • Complexity: {}/100\n", job.analysis.complexity_score));
                out.push_str(&format!("  • ATS keywords: {}\n", job.analysis.ats_keywords.join(", ")));
            }
            ReportBody::Match(m) => {
                out.push_str(&format!("🎯 Resume match: {} → {}\n", m.resume_file, m.job_file));
                out.push_str(&format!("\n  Match score: {}\n", self.percent(m.result.match_score)));
                self.write_list(&mut out, "✅ Matched skills", &m.result.matched_skills);
                self.write_list(&mut out, "⚠️  Missing skills", &m.result.missing_skills);
                self.write_list(&mut out, "💡 Suggestions", &m.result.suggestions);
            }
            ReportBody::Ats(ats) => {
                out.push_str(&format!("📄 ATS check: {}\n", ats.resume_file));
                out.push_str(&format!(
                    "\n  ATS score: {}/100 {}\n",
                    ats.result.score,
                    self.level_badge(ats.result.level)
                ));
                self.write_list(&mut out, "💡 Feedback", &ats.result.feedback);
            }
            ReportBody::Batch(batch) => {
                out.push_str(&format!("🏁 Batch ranking against {}\n", batch.job_file));
                out.push('\n');
                for (rank, entry) in batch.entries.iter().enumerate() {
                    match (entry.match_score, &entry.error) {
                        (Some(score), _) => {
                            out.push_str(&format!(
                                "  {:>2}. {} {} ({} matched, {} missing)\n",
                                rank + 1,
                                self.percent(score),
                                entry.resume_file,
                                entry.matched_skills,
                                entry.missing_skills
                            ));
                        }
                        (None, error) => {
                            out.push_str(&format!(
                                "   -. {} {}\n",
                                entry.resume_file,
                                self.colorize(error.as_deref().unwrap_or("failed"), Color::Red)
                            ));
                        }
                    }
                }
            }
        }

        out.push_str(&format!(
            "\n{}\n",
            self.colorize(
                &format!("Processed in {} ms", report.metadata.processing_time_ms),
                Color::BrightBlack
            )
        ));
        Ok(out)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &Report) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn list(out: &mut String, title: &str, items: &[String]) {
        if items.is_empty() {
            return;
        }
        out.push_str(&format!("\n## {}\n\n", title));
        for item in items {
            out.push_str(&format!("- {}\n", item));
        }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &Report) -> Result<String> {
        let mut out = String::new();

        match &report.body {
            ReportBody::Job(job) => {
                let e = &job.analysis.extraction;
                out.push_str("# Job Description Analysis\n\n");
                out.push_str("| Field | Value |\n|---|---|\n");
                out.push_str(&format!("| Title | {} |\n", e.job_title));
                out.push_str(&format!("| Company | {} |\n", e.company));
                out.push_str(&format!("| Location | {} |\n", e.location));
                out.push_str(&format!("| Salary | {} |\n", e.salary_range));
                out.push_str(&format!("| Complexity | {}/100 |\n", job.analysis.complexity_score));

                if !e.skills.is_empty() {
                    out.push_str("\n## Skills\n\n");
                    for group in &e.skills {
                        let names: Vec<&str> = group.skills.iter().map(|s| s.name.as_str()).collect();
                        out.push_str(&format!("- **{}**: {}\n", group.category, names.join(", ")));
                    }
                }
                Self::list(&mut out, "Experience", &e.experience_phrases);
                Self::list(&mut out, "Education", &e.education_phrases);
                Self::list(&mut out, "Responsibilities", &e.responsibilities);
                Self::list(&mut out, "Requirements", &e.requirements);
                Self::list(&mut out, "ATS Keywords", &job.analysis.ats_keywords);
            }
            ReportBody::Match(m) => {
                out.push_str("# Resume Match\n\n");
                out.push_str(&format!("**Resume:** {}  \n", m.resume_file));
                out.push_str(&format!("**Job:** {}  \n", m.job_file));
                out.push_str(&format!("**Match score:** {:.1}%\n", m.result.match_score));
                Self::list(&mut out, "Matched Skills", &m.result.matched_skills);
                Self::list(&mut out, "Missing Skills", &m.result.missing_skills);
                Self::list(&mut out, "Suggestions", &m.result.suggestions);
            }
            ReportBody::Ats(ats) => {
                out.push_str("# ATS Check\n\n");
                out.push_str(&format!("**Resume:** {}  \n", ats.resume_file));
                out.push_str(&format!("**Score:** {}/100 ({})\n", ats.result.score, ats.result.level));
                Self::list(&mut out, "Feedback", &ats.result.feedback);
            }
            ReportBody::Batch(batch) => {
                out.push_str("# Batch Ranking\n\n");
                out.push_str(&format!("Job: {}\n\n", batch.job_file));
                out.push_str("| Rank | Resume | Score | Matched | Missing |\n|---|---|---|---|---|\n");
                for (rank, entry) in batch.entries.iter().enumerate() {
                    let score = entry
                        .match_score
                        .map(|s| format!("{:.1}%", s))
                        .or_else(|| entry.error.clone())
                        .ok_or_else(|| {
                            ParserError::OutputFormatting(format!("batch entry {} has neither score nor error", entry.resume_file))
                        })?;
                    out.push_str(&format!(
                        "| {} | {} | {} | {} | {} |\n",
                        rank + 1,
                        entry.resume_file,
                        score,
                        entry.matched_skills,
                        entry.missing_skills
                    ));
                }
            }
        }

        if self.include_metadata {
            out.push_str(&format!(
                "\n---\n_Generated {} by placement-parser v{}_\n",
                report.metadata.generated_at.format("%Y-%m-%d %H:%M UTC"),
                report.metadata.parser_version
            ));
        }

        Ok(out)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}
