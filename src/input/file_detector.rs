//! File type detection

use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Pdf,
    Text,
    Markdown,
    Unknown,
}

impl FileType {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) => match ext.to_lowercase().as_str() {
                "pdf" => FileType::Pdf,
                "txt" | "text" => FileType::Text,
                "md" | "markdown" => FileType::Markdown,
                _ => FileType::Unknown,
            },
            // Extensionless files are read as plain text
            None => FileType::Text,
        }
    }
}
