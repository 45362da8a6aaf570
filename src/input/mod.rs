//! Input loading for the CLI
//! Reads resumes and job descriptions from text, markdown and PDF files

pub mod file_detector;
pub mod manager;
pub mod text_extractor;

pub use manager::InputManager;
