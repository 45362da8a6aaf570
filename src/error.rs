//! Error handling for the placement parser

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParserError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, ParserError>;

/// Convert anyhow errors coming back from the CLI layer
impl From<anyhow::Error> for ParserError {
    fn from(err: anyhow::Error) -> Self {
        ParserError::InvalidInput(err.to_string())
    }
}

impl From<toml::de::Error> for ParserError {
    fn from(err: toml::de::Error) -> Self {
        ParserError::Configuration(format!("Failed to parse TOML: {}", err))
    }
}
