//! 文字数・語数・文数・読了時間の統計。

use serde::Serialize;

use crate::util::text::{char_len, round_to, split_sentences};

/// 1分あたりの平均読了語数。
pub const WORDS_PER_MINUTE: f64 = 200.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContentStats {
    pub word_count: usize,
    pub sentence_count: usize,
    pub char_count: usize,
    pub reading_time_minutes: f64,
}

impl ContentStats {
    /// テキストから統計を計算する。入力のみに依存する純粋関数。
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn compute(text: &str) -> Self {
        let word_count = text.split_whitespace().count();
        Self {
            word_count,
            sentence_count: split_sentences(text).len(),
            char_count: char_len(text),
            reading_time_minutes: round_to(word_count as f64 / WORDS_PER_MINUTE, 1),
        }
    }
}
