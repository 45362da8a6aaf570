//! Ordered regex pattern tables for heuristic field extraction
//!
//! Each field is tried against its patterns in order and the first
//! pattern that matches anywhere in the text wins. The `regex` crate
//! runs in linear time, so crafted input cannot trigger backtracking
//! blowups.

use regex::Regex;
use std::sync::LazyLock;

/// A pattern and the capture group holding the field value.
pub struct FieldPattern {
    pub regex: Regex,
    pub group: usize,
}

impl FieldPattern {
    fn new(pattern: &str, group: usize) -> Self {
        Self {
            regex: Regex::new(pattern).unwrap_or_else(|e| panic!("invalid field pattern {:?}: {}", pattern, e)),
            group,
        }
    }
}

/// First non-empty capture from the first matching pattern, trimmed.
pub fn first_match(patterns: &[FieldPattern], text: &str) -> Option<String> {
    patterns.iter().find_map(|p| {
        p.regex
            .captures(text)
            .and_then(|caps| caps.get(p.group))
            .map(|m| m.as_str().trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    })
}

/// Colon, or a dash set off by spaces ("Company - Acme" but not "company-wide")
const LABEL_SEP: &str = r"[ \t]*(?::|[ \t]-[ \t])[ \t]*";
/// Capitalized run of up to six words on one line
const TITLE_WORDS: &str = r"[A-Z][A-Za-z0-9+#/&-]*(?:[ \t]+[A-Z][A-Za-z0-9+#/&-]*){0,5}";
/// Capitalized place names, optionally comma separated
const PLACE_WORDS: &str = r"[A-Z][A-Za-z'-]*(?:,?[ \t]+[A-Z][A-Za-z'-]*){0,3}";
const ORG_WORDS: &str = r"[A-Z][A-Za-z0-9&'-]*(?:[ \t]+[A-Z][A-Za-z0-9&'-]*){0,3}";
const AMOUNT: &str = r"[$₹€£]?[ \t]*\d[\d,]*(?:\.\d+)?(?:[ \t]*[kKmM]\b)?";
const PERIOD: &str = r"(?:[ \t]*(?i:lpa|per[ \t]+annum|per[ \t]+year|per[ \t]+month|/year|/yr|/month))?";

/// Experience phrases. Group 1, when present, is the integer part of a
/// decimal ("3." in "3.5 years"); such matches are not whole-year counts.
pub static EXPERIENCE: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)(\d+\.)?\b\d+\s*-\s*\d+\s*(?:years?|yrs?)\s*(?:of\s+)?experience\b",
        r"(?i)(\d+\.)?\b\d+\s*[+-]?\s*(?:years?|yrs?)\s*(?:of\s+)?experience\b",
        r"(?i)\bexperience\s+(?:of\s+)?\d+\s*\+?\s*(?:years?|yrs?)\b",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap_or_else(|e| panic!("invalid experience pattern {:?}: {}", p, e)))
    .collect()
});

pub static JOB_TITLE: LazyLock<Vec<FieldPattern>> = LazyLock::new(|| {
    vec![
        FieldPattern::new(&format!(r"(?i:\b(?:job[ \t]+title|position|role))\b[ \t]*(?:of[ \t]+|:[ \t]*)?({})", TITLE_WORDS), 1),
        FieldPattern::new(&format!(r"(?i:\bwe[ \t]+are[ \t]+hiring)\b[ \t]*:?[ \t]+(?:(?i:an?|the)[ \t]+)?({})", TITLE_WORDS), 1),
        FieldPattern::new(
            &format!(
                r"(?i:\b(?:looking[ \t]+for|seeking|need))\b[ \t]+(?:(?i:an?|the)[ \t]+)?(?:(?i:experienced|talented|skilled|motivated)[ \t]+)?({})",
                TITLE_WORDS
            ),
            1,
        ),
        FieldPattern::new(&format!(r"({})[ \t]+(?i:position|role|opening)\b", TITLE_WORDS), 1),
    ]
});

pub static LOCATION: LazyLock<Vec<FieldPattern>> = LazyLock::new(|| {
    vec![
        FieldPattern::new(&format!(r"(?i:\blocation)\b{}({})", LABEL_SEP, PLACE_WORDS), 1),
        FieldPattern::new(&format!(r"(?i:\bbased[ \t]+(?:in|out[ \t]+of))\b[ \t]+({})", PLACE_WORDS), 1),
        FieldPattern::new(&format!(r"(?i:\blocated[ \t]+in)\b[ \t]+({})", PLACE_WORDS), 1),
        FieldPattern::new(&format!(r"(?i:\bwork[ \t]+from)\b[ \t]+({})", PLACE_WORDS), 1),
    ]
});

pub static SALARY: LazyLock<Vec<FieldPattern>> = LazyLock::new(|| {
    let label = r"(?i:\b(?:salary|compensation|pay|ctc))\b(?:[ \t]*(?i:range|band))?[ \t]*[:-]?[ \t]*";
    vec![
        FieldPattern::new(&format!(r"{}({}[ \t]*(?:-|(?i:to))[ \t]*{}{})", label, AMOUNT, AMOUNT, PERIOD), 1),
        FieldPattern::new(&format!(r"({}\d[\d,]*(?:[ \t]*[kK]\b)?[ \t]*-[ \t]*[$₹€£]?[ \t]*\d[\d,]*(?:[ \t]*[kK]\b)?{})", r"[$₹€£][ \t]*", PERIOD), 1),
        FieldPattern::new(&format!(r"{}({}{})", label, AMOUNT, PERIOD), 1),
    ]
});

pub static COMPANY: LazyLock<Vec<FieldPattern>> = LazyLock::new(|| {
    vec![
        FieldPattern::new(
            &format!(r"(?i:\b(?:company|employer|organization)(?:[ \t]+name)?)\b{}([^\s][^\n]*)", LABEL_SEP),
            1,
        ),
        FieldPattern::new(&format!(r"({})[ \t]+(?i:is[ \t]+(?:hiring|looking|seeking))\b", ORG_WORDS), 1),
        FieldPattern::new(&format!(r"(?i:\bjoin)\b[ \t]+(?:(?i:the[ \t]+team[ \t]+at)[ \t]+)?({})", ORG_WORDS), 1),
        FieldPattern::new(&format!(r"(?i:\bat)\b[ \t]+({}),?[ \t]+(?i:we|you)\b", ORG_WORDS), 1),
    ]
});
