//! テキスト処理ユーティリティ。
//!
//! 文分割、文字数ベースの切り詰め、折り返し、丸めを提供します。
//! 文字数はすべてUnicodeスカラー値単位で数えます。

use once_cell::sync::Lazy;
use regex::Regex;

/// 文末記号（`.` `!` `?` の1文字以上の連続）。
static SENTENCE_TERMINATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+").expect("compile sentence terminator regex"));

/// テキストを文に分割する。
///
/// 文末記号の連続で区切り、前後の空白を取り除き、空の文は捨てる。
/// 文末記号そのものは結果に含まれない。
#[must_use]
pub fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE_TERMINATORS
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// 文字数を数える。
#[must_use]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// 先頭から最大 `max_chars` 文字を返す。
#[must_use]
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

/// テキストを単語境界で `width` 文字以内の行に折り返す。
///
/// 1単語が `width` を超える場合は文字単位で強制的に分割する。
/// 空白の連続は1つにまとめられる。
#[must_use]
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word = word;
        let mut word_len = char_len(word);

        while word_len > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let head = truncate_chars(word, width);
            lines.push(head.to_string());
            word = &word[head.len()..];
            word_len -= width;
        }

        if word.is_empty() {
            continue;
        }

        let needed = if current.is_empty() {
            word_len
        } else {
            current_len + 1 + word_len
        };

        if needed <= width {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            current_len = needed;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

/// 小数点以下 `places` 桁に丸める。
///
/// 浮動小数点数が実際に保持する値を基準に丸め、ちょうど中間の値は偶数側に寄せる。
/// `0.15` は内部的に `0.1499…` なので `0.1` になる。
#[must_use]
pub fn round_to(value: f64, places: usize) -> f64 {
    format!("{value:.places$}").parse().unwrap_or(value)
}
