//! Frequency-based hashtag derivation.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;

/// Default number of hashtags appended to professional posts.
pub const DEFAULT_MAX_TAGS: usize = 5;

const GENERAL_STOPWORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
];

const SHORT_FORM_STOPWORDS: &[&str] = &[
    "this", "that", "with", "from", "your", "have", "more", "what",
];

static WORD_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\w+\b").expect("compile word run regex"));

static ALPHA_WORDS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[a-zA-Z]{4,}\b").expect("compile alphabetic word regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashtagStyle {
    /// `#keyword`
    Lowercase,
    /// `#Keyword`
    TitleCase,
}

/// Picks the most frequent meaningful words of a text and renders them as hashtags.
///
/// Ties keep first-appearance order.
#[derive(Debug, Clone)]
pub struct HashtagExtractor {
    pattern: &'static Lazy<Regex>,
    stopwords: HashSet<&'static str>,
    min_len: usize,
    style: HashtagStyle,
}

impl HashtagExtractor {
    /// Word-boundary alphanumeric runs, general stopwords, tokens longer than three characters.
    #[must_use]
    pub fn general() -> Self {
        Self {
            pattern: &WORD_RUNS,
            stopwords: GENERAL_STOPWORDS.iter().copied().collect(),
            min_len: 4,
            style: HashtagStyle::Lowercase,
        }
    }

    /// Alphabetic words of four letters or more with the short-form stopword set.
    #[must_use]
    pub fn short_form() -> Self {
        Self {
            pattern: &ALPHA_WORDS,
            stopwords: SHORT_FORM_STOPWORDS.iter().copied().collect(),
            min_len: 4,
            style: HashtagStyle::TitleCase,
        }
    }

    /// Ranked candidate keywords, most frequent first.
    #[must_use]
    pub fn keywords(&self, text: &str, max_tags: usize) -> Vec<String> {
        let lowered = text.to_lowercase();
        let mut order: Vec<&str> = Vec::new();
        let mut counts: HashMap<&str, usize> = HashMap::new();

        for token in self.pattern.find_iter(&lowered).map(|m| m.as_str()) {
            if self.stopwords.contains(token) || token.chars().count() < self.min_len {
                continue;
            }
            let count = counts.entry(token).or_insert(0);
            if *count == 0 {
                order.push(token);
            }
            *count += 1;
        }

        // stable sort: equal counts stay in first-appearance order
        order.sort_by(|a, b| counts[b].cmp(&counts[a]));
        order
            .into_iter()
            .take(max_tags)
            .map(str::to_string)
            .collect()
    }

    /// Space-joined hashtags, empty when nothing qualifies.
    #[must_use]
    pub fn extract(&self, text: &str, max_tags: usize) -> String {
        self.keywords(text, max_tags)
            .iter()
            .map(|word| format!("#{}", self.render(word)))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn render(&self, word: &str) -> String {
        match self.style {
            HashtagStyle::Lowercase => word.to_string(),
            HashtagStyle::TitleCase => {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            }
        }
    }
}

impl Default for HashtagExtractor {
    fn default() -> Self {
        Self::general()
    }
}
