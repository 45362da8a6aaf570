//! Placement parser library
//!
//! Skill extraction, job-field parsing and resume scoring over a
//! configurable skill taxonomy.

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod input;
pub mod output;
pub mod processing;
pub mod taxonomy;

pub use config::Config;
pub use engine::Engine;
pub use error::{ParserError, Result};
pub use taxonomy::SkillTaxonomy;
