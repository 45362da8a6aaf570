//! Engine façade: one configured extractor and scorer shared by callers

use crate::config::{Config, LimitsConfig, OversizePolicy, ScoringConfig, TaxonomySource};
use crate::error::{ParserError, Result};
use crate::processing::keywords::generate_ats_keywords;
use crate::processing::scorer::{score_complexity, Scorer};
use crate::processing::text_processor::TextProcessor;
use crate::processing::{Extractor, ExtractionResult, JobAnalysis, MatchResult, ResumeFields, ScoreResult, SkillGroup};
use crate::taxonomy::SkillTaxonomy;
use log::{info, warn};
use std::sync::Arc;

/// Extraction and scoring over one immutable taxonomy.
///
/// Cloning is cheap and clones share the compiled matcher, so a batch can
/// hand one engine to many worker threads.
#[derive(Clone)]
pub struct Engine {
    inner: Arc<EngineInner>,
}

struct EngineInner {
    extractor: Extractor,
    scorer: Scorer,
    processor: TextProcessor,
    limits: LimitsConfig,
    keyword_cap: usize,
}

impl Engine {
    /// Build from configuration, loading the taxonomy it names.
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;

        let taxonomy = match config.taxonomy.source {
            TaxonomySource::Builtin => SkillTaxonomy::builtin()?,
            TaxonomySource::File => {
                let path = config.taxonomy.path.as_deref().ok_or_else(|| {
                    ParserError::Configuration("taxonomy.path is required for file source".to_string())
                })?;
                SkillTaxonomy::from_file(path)?
            }
        };

        Self::new(taxonomy, config.limits.clone(), config.scoring.clone())
    }

    pub fn new(taxonomy: SkillTaxonomy, limits: LimitsConfig, scoring: ScoringConfig) -> Result<Self> {
        let keyword_cap = scoring.keyword_cap;
        let extractor = Extractor::new(Arc::new(taxonomy), limits.clone())?;
        info!(
            "Engine ready: {} categories, {} skills",
            extractor.taxonomy().categories().len(),
            extractor.matcher().skill_count()
        );

        Ok(Self {
            inner: Arc::new(EngineInner {
                extractor,
                scorer: Scorer::new(scoring),
                processor: TextProcessor::new(),
                limits,
                keyword_cap,
            }),
        })
    }

    /// Engine with the built-in taxonomy and default limits.
    pub fn with_defaults() -> Result<Self> {
        Self::from_config(&Config::default())
    }

    pub fn taxonomy(&self) -> &SkillTaxonomy {
        self.inner.extractor.taxonomy()
    }

    /// Extract skills and job fields. Fails only when `text` exceeds the
    /// configured size limit under the reject policy.
    pub fn extract(&self, text: &str) -> Result<ExtractionResult> {
        let text = self.check_size(text)?;
        Ok(self.inner.extractor.extract(text))
    }

    /// Extraction plus complexity score and ATS keywords.
    pub fn parse_job_description(&self, text: &str) -> Result<JobAnalysis> {
        let extraction = self.extract(text)?;
        Ok(JobAnalysis {
            complexity_score: score_complexity(&extraction),
            ats_keywords: self.generate_ats_keywords(&extraction),
            extraction,
        })
    }

    pub fn score_complexity(&self, result: &ExtractionResult) -> u32 {
        score_complexity(result)
    }

    pub fn score_ats(&self, resume: &ResumeFields) -> ScoreResult {
        self.inner.scorer.score_ats(resume)
    }

    pub fn score_match(&self, resume: &[SkillGroup], job: &[SkillGroup]) -> MatchResult {
        self.inner.scorer.score_match(resume, job)
    }

    pub fn generate_ats_keywords(&self, result: &ExtractionResult) -> Vec<String> {
        generate_ats_keywords(result, self.inner.keyword_cap)
    }

    /// Extract both texts and score the resume against the job. Missing
    /// skills the resume seems to misspell get an extra suggestion.
    pub fn match_texts(&self, resume_text: &str, job_text: &str) -> Result<MatchResult> {
        let resume = self.extract(resume_text)?;
        let job = self.extract(job_text)?;
        let mut result = self.score_match(&resume.skills, &job.skills);

        let words = self.inner.processor.word_set(self.check_size(resume_text)?);
        for (skill, word) in self.inner.extractor.matcher().near_misses(&result.missing_skills, &words) {
            result
                .suggestions
                .push(format!("Resume mentions '{}'; use the exact term '{}'", word, skill));
        }

        Ok(result)
    }

    fn check_size<'a>(&self, text: &'a str) -> Result<&'a str> {
        let limit = self.inner.limits.max_input_bytes;
        if text.len() <= limit {
            return Ok(text);
        }

        match self.inner.limits.oversize_policy {
            OversizePolicy::Reject => Err(ParserError::InvalidInput(format!(
                "text is {} bytes, limit is {} bytes",
                text.len(),
                limit
            ))),
            OversizePolicy::Truncate => {
                warn!("Truncating {}-byte input to {} bytes", text.len(), limit);
                Ok(self.inner.processor.truncate_to_boundary(text, limit))
            }
        }
    }
}
