//! Text extraction and scoring
//!
//! Every operation here is a pure function of its inputs and the shared,
//! immutable taxonomy, so independent calls can run on any thread.

pub mod document;
pub mod extractor;
pub mod keywords;
pub mod patterns;
pub mod scorer;
pub mod skill_matcher;
pub mod templates;
pub mod text_processor;
pub mod types;

pub use document::{ResumeFields, SectionType};
pub use extractor::Extractor;
pub use keywords::generate_ats_keywords;
pub use scorer::{score_complexity, Scorer};
pub use types::{
    ExtractedSkill, ExtractionResult, JobAnalysis, MatchResult, MentionKind, ScoreLevel, ScoreResult,
    SkillGroup, NOT_SPECIFIED,
};
