//! Text normalization and splitting helpers shared by the extractor

use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Default, Clone, Copy)]
pub struct TextProcessor;

impl TextProcessor {
    pub fn new() -> Self {
        Self
    }

    /// Map typographic punctuation onto ASCII so patterns see one spelling.
    pub fn normalize_unicode(&self, text: &str) -> String {
        text.chars()
            .map(|c| match c {
                '\u{2018}' | '\u{2019}' => '\'', // Smart quotes to regular quotes
                '\u{201C}' | '\u{201D}' => '"',  // Smart double quotes
                '\u{2013}' | '\u{2014}' => '-',  // En dash, em dash to hyphen
                '\u{2026}' => '.',               // Ellipsis to period
                '\u{00A0}' => ' ',
                _ => c,
            })
            .collect()
    }

    /// Split on `.`, `!` and `?`, trimming each piece and dropping empties.
    pub fn split_sentences<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.split(['.', '!', '?'])
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Sentences containing any of `keywords` (lowercase substrings),
    /// in original order, at most `max`.
    pub fn sentences_with_keywords(&self, text: &str, keywords: &[&str], max: usize) -> Vec<String> {
        self.split_sentences(text)
            .into_iter()
            .filter(|sentence| {
                let lower = sentence.to_lowercase();
                keywords.iter().any(|k| lower.contains(k))
            })
            .take(max)
            .map(str::to_string)
            .collect()
    }

    /// Lowercased distinct words, used for near-miss lookups.
    pub fn word_set(&self, text: &str) -> HashSet<String> {
        text.unicode_words()
            .filter(|w| w.chars().count() > 2)
            .map(|w| w.to_lowercase())
            .collect()
    }

    /// Longest prefix of `text` that fits in `max_bytes` without
    /// splitting a character.
    pub fn truncate_to_boundary<'a>(&self, text: &'a str, max_bytes: usize) -> &'a str {
        if text.len() <= max_bytes {
            return text;
        }
        let mut end = max_bytes;
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        &text[..end]
    }
}
