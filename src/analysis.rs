//! Text analytics consumed by the formatters and reported to callers.

pub mod hashtags;
pub(crate) mod lexicon;
pub mod sentiment;
pub mod stats;

pub use hashtags::{HashtagExtractor, HashtagStyle};
pub use sentiment::{AnalysisResult, LexiconScorer, SentimentAnalyzer, SentimentLabel, SentimentScorer};
pub use stats::ContentStats;
