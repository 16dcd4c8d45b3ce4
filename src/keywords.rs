//! @acp:module "Topic Keywords"
//! @acp:summary "Content-word extraction and casing helpers for topics"
//! @acp:domain generation
//! @acp:layer utility

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

static TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[a-z0-9]+").unwrap());

/// Articles, prepositions and shopping filler words
const STOPWORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "for", "to", "of", "in", "on", "under", "over", "with",
    "without", "best", "top", "vs", "guide", "buy", "buying",
];

/// Returned when a topic has no content words
pub const FALLBACK_KEYWORDS: &[&str] = &["quality", "budget", "features"];

/// Extract deduplicated content words from a topic.
///
/// Never returns an empty list: topics made only of stopwords (or empty
/// strings) fall back to [`FALLBACK_KEYWORDS`].
pub fn extract_keywords(topic: &str) -> Vec<String> {
    let lowered = topic.to_lowercase();
    let mut seen = HashSet::new();
    let keywords: Vec<String> = TOKEN_PATTERN
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|w| !STOPWORDS.contains(w))
        .filter(|w| seen.insert(*w))
        .map(str::to_string)
        .collect();

    if keywords.is_empty() {
        return FALLBACK_KEYWORDS.iter().map(|w| w.to_string()).collect();
    }
    keywords
}

/// Capitalize each whitespace-delimited token, lowercasing the rest
pub fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Capitalize every letter that follows a non-letter ("first-time" -> "First-Time")
pub fn capitalize_words(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_alpha = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
