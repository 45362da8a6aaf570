//! Configuration management for the placement parser

use crate::error::{ParserError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub taxonomy: TaxonomyConfig,
    pub limits: LimitsConfig,
    pub scoring: ScoringConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxonomyConfig {
    pub source: TaxonomySource,
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxonomySource {
    #[default]
    Builtin,
    File,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    pub max_education: usize,
    pub max_responsibilities: usize,
    pub max_requirements: usize,
    pub max_input_bytes: usize,
    pub oversize_policy: OversizePolicy,
}

/// What to do with text longer than `max_input_bytes`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OversizePolicy {
    #[default]
    Reject,
    Truncate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub excellent: u32,
    pub good: u32,
    pub average: u32,
    pub keyword_cap: usize,
    pub match_list_cap: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Console,
    Json,
    Markdown,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_education: 5,
            max_responsibilities: 10,
            max_requirements: 10,
            max_input_bytes: 1024 * 1024,
            oversize_policy: OversizePolicy::Reject,
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            excellent: 80,
            good: 60,
            average: 50,
            keyword_cap: 20,
            match_list_cap: 10,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            color_output: true,
        }
    }
}

impl Config {
    /// Load configuration from an explicit path, or from the per-user
    /// config file. A missing per-user file yields defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = Self::config_path();
                if default_path.exists() {
                    Self::from_file(&default_path)?
                } else {
                    Self::default()
                }
            }
        };

        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            ParserError::Configuration(format!(
                "Failed to parse config '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ParserError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.limits.max_input_bytes == 0 {
            return Err(ParserError::Configuration(
                "limits.max_input_bytes must be greater than zero".to_string(),
            ));
        }

        let s = &self.scoring;
        if !(s.excellent > s.good && s.good > s.average) {
            return Err(ParserError::Configuration(format!(
                "scoring thresholds must be strictly decreasing (excellent {} > good {} > average {})",
                s.excellent, s.good, s.average
            )));
        }

        if self.taxonomy.source == TaxonomySource::File && self.taxonomy.path.is_none() {
            return Err(ParserError::Configuration(
                "taxonomy.source = \"file\" requires taxonomy.path".to_string(),
            ));
        }

        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("placement-parser")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_bucket_caps() {
        let config = Config::default();
        assert_eq!(config.limits.max_education, 5);
        assert_eq!(config.limits.max_responsibilities, 10);
        assert_eq!(config.limits.max_requirements, 10);
        assert_eq!(config.limits.max_input_bytes, 1_048_576);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [limits]
            max_requirements = 3
            oversize_policy = "truncate"
            "#,
        )
        .unwrap();

        assert_eq!(config.limits.max_requirements, 3);
        assert_eq!(config.limits.max_education, 5);
        assert_eq!(config.limits.oversize_policy, OversizePolicy::Truncate);
        assert_eq!(config.scoring.excellent, 80);
    }

    #[test]
    fn test_rejects_unordered_thresholds() {
        let mut config = Config::default();
        config.scoring.good = 90;
        assert!(matches!(config.validate(), Err(ParserError::Configuration(_))));
    }

    #[test]
    fn test_rejects_file_source_without_path() {
        let mut config = Config::default();
        config.taxonomy.source = TaxonomySource::File;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.output.format = OutputFormat::Json;
        config.save(&path).unwrap();

        let loaded = Config::load(Some(&path)).unwrap();
        assert_eq!(loaded, config);
    }
}
