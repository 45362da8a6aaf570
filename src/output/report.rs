//! Report structures handed to the output formatters

use crate::processing::{JobAnalysis, MatchResult, ResumeFields, ScoreResult};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One CLI run's output plus metadata
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub metadata: ReportMetadata,
    pub body: ReportBody,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", content = "result", rename_all = "snake_case")]
pub enum ReportBody {
    Job(JobReport),
    Match(MatchReport),
    Ats(AtsReport),
    Batch(BatchReport),
}

#[derive(Debug, Clone, Serialize)]
pub struct JobReport {
    pub job_file: String,
    pub analysis: JobAnalysis,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchReport {
    pub resume_file: String,
    pub job_file: String,
    pub result: MatchResult,
}

#[derive(Debug, Clone, Serialize)]
pub struct AtsReport {
    pub resume_file: String,
    pub sections: ResumeFields,
    pub result: ScoreResult,
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub job_file: String,
    /// Sorted by descending match score; failed files last
    pub entries: Vec<BatchEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchEntry {
    pub resume_file: String,
    pub match_score: Option<f64>,
    pub matched_skills: usize,
    pub missing_skills: usize,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub parser_version: String,
    pub processing_time_ms: u64,
}

impl Report {
    pub fn new(body: ReportBody, processing_time_ms: u64) -> Self {
        Self {
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                parser_version: env!("CARGO_PKG_VERSION").to_string(),
                processing_time_ms,
            },
            body,
        }
    }
}

impl BatchReport {
    /// Rank entries best first; entries that failed go to the bottom.
    pub fn new(job_file: String, mut entries: Vec<BatchEntry>) -> Self {
        entries.sort_by(|a, b| {
            let a_score = a.match_score.unwrap_or(-1.0);
            let b_score = b.match_score.unwrap_or(-1.0);
            b_score
                .total_cmp(&a_score)
                .then_with(|| a.resume_file.cmp(&b.resume_file))
        });
        Self { job_file, entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(file: &str, score: Option<f64>) -> BatchEntry {
        BatchEntry {
            resume_file: file.to_string(),
            match_score: score,
            matched_skills: 0,
            missing_skills: 0,
            error: score.is_none().then(|| "unreadable".to_string()),
        }
    }

    #[test]
    fn test_batch_ranking() {
        let report = BatchReport::new(
            "job.txt".to_string(),
            vec![entry("b.txt", Some(40.0)), entry("bad.pdf", None), entry("a.txt", Some(75.5)), entry("c.txt", Some(40.0))],
        );
        let order: Vec<&str> = report.entries.iter().map(|e| e.resume_file.as_str()).collect();
        assert_eq!(order, vec!["a.txt", "b.txt", "c.txt", "bad.pdf"]);
    }

    #[test]
    fn test_report_json_shape() {
        let report = Report::new(ReportBody::Batch(BatchReport::new("job.txt".to_string(), vec![])), 3);
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["body"]["kind"], "batch");
        assert_eq!(value["body"]["result"]["job_file"], "job.txt");
        assert_eq!(value["metadata"]["processing_time_ms"], 3);
    }
}
