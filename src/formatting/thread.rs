//! Short-form thread segmentation.

use crate::util::text::{char_len, split_sentences, wrap_words};

/// Hard ceiling of one published post, indicator included.
pub const POST_LIMIT: usize = 280;

/// Packing threshold for sentence text, leaving room for the `(i/n)` indicator.
pub const PACK_LIMIT: usize = 250;

/// Greedily packs sentences into posts no longer than [`POST_LIMIT`].
#[derive(Debug, Clone, Copy)]
pub struct ThreadSplitter {
    pack_limit: usize,
    post_limit: usize,
}

impl Default for ThreadSplitter {
    fn default() -> Self {
        Self {
            pack_limit: PACK_LIMIT,
            post_limit: POST_LIMIT,
        }
    }
}

impl ThreadSplitter {
    #[must_use]
    pub fn split(&self, text: &str) -> Vec<String> {
        let mut posts: Vec<String> = Vec::new();
        let mut current = String::new();

        for sentence in split_sentences(text) {
            let candidate = if current.is_empty() {
                format!("{sentence}.")
            } else {
                format!("{current} {sentence}.")
            };

            if char_len(&candidate) <= self.pack_limit {
                current = candidate;
                continue;
            }

            if !current.is_empty() {
                posts.push(std::mem::take(&mut current));
            }

            let standalone = format!("{sentence}.");
            if char_len(&standalone) <= self.pack_limit {
                current = standalone;
                continue;
            }

            let mut pieces = wrap_words(&standalone, self.pack_limit);
            current = pieces.pop().unwrap_or_default();
            posts.extend(pieces);
        }

        if !current.is_empty() {
            posts.push(current);
        }

        match posts.len() {
            0 => vec![text.to_string()],
            1 => posts,
            total => {
                let posts: Vec<String> = posts
                    .into_iter()
                    .enumerate()
                    .map(|(index, post)| format!("{post} ({}/{total})", index + 1))
                    .collect();
                debug_assert!(posts.iter().all(|post| char_len(post) <= self.post_limit));
                posts
            }
        }
    }
}
