//! Reads resumes and postings from disk, caching text per path

use crate::error::{ParserError, Result};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor};
use log::{debug, info};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub struct InputManager {
    cache: HashMap<PathBuf, String>,
    enable_cache: bool,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    /// Read `path` as text, choosing the extractor from its extension.
    pub async fn read_text(&mut self, path: &Path) -> Result<String> {
        if let Some(cached) = self.cached(path) {
            debug!("Cache hit for {}", path.display());
            return Ok(cached.to_string());
        }

        if !path.is_file() {
            return Err(ParserError::InvalidInput(format!(
                "Not a readable file: {}",
                path.display()
            )));
        }

        let file_type = FileType::from_path(path);
        info!("Reading {:?} document: {}", file_type, path.display());
        let text = match file_type {
            FileType::Pdf => PdfExtractor.extract(path).await?,
            FileType::Text => PlainTextExtractor.extract(path).await?,
            FileType::Markdown => MarkdownExtractor.extract(path).await?,
            FileType::Unknown => {
                return Err(ParserError::UnsupportedFormat(format!(
                    "{} (expected .txt, .md or .pdf)",
                    path.display()
                )))
            }
        };
        debug!("Read {} bytes of text from {}", text.len(), path.display());

        if self.enable_cache {
            self.cache.insert(path.to_path_buf(), text.clone());
        }
        Ok(text)
    }

    fn cached(&self, path: &Path) -> Option<&str> {
        if !self.enable_cache {
            return None;
        }
        self.cache.get(path).map(String::as_str)
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}
