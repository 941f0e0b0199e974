use crate::analysis::hashtags::{DEFAULT_MAX_TAGS, HashtagExtractor};

/// Paragraph normalisation plus trailing hashtags for professional networks.
#[derive(Debug, Clone, Default)]
pub struct LinkedInFormatter {
    hashtags: HashtagExtractor,
}

impl LinkedInFormatter {
    #[must_use]
    pub fn new(hashtags: HashtagExtractor) -> Self {
        Self { hashtags }
    }

    #[must_use]
    pub fn format(&self, text: &str) -> String {
        let mut post = text
            .split("\n\n")
            .map(str::trim)
            .filter(|paragraph| !paragraph.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n");

        let tags = self.hashtags.extract(text, DEFAULT_MAX_TAGS);
        if !tags.is_empty() {
            post.push_str("\n\n");
            post.push_str(&tags);
        }
        post
    }
}
