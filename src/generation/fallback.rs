//! Offline, deterministic generation used when the primary tier fails.

use tracing::debug;

use crate::analysis::HashtagExtractor;
use crate::domain::{GenerationRequest, Platform};
use crate::formatting::thread::{PACK_LIMIT, POST_LIMIT};
use crate::util::text::{char_len, split_sentences, truncate_chars};

const SHORT_FORM_HEAD_CHARS: usize = 200;
const SHORT_FORM_HASHTAGS: usize = 3;
const PROFESSIONAL_INTRO_CHARS: usize = 500;
const PROFESSIONAL_MAX_POINTS: usize = 3;
const PROFESSIONAL_LIMIT: usize = 3000;
const PROFESSIONAL_HASHTAGS: &str = "#ContentStrategy #DigitalMarketing";
const GENERIC_LIMIT: usize = 1000;

/// Total over its inputs: never fails and never touches the network.
#[derive(Debug, Clone)]
pub struct FallbackGenerator {
    hashtags: HashtagExtractor,
}

impl Default for FallbackGenerator {
    fn default() -> Self {
        Self {
            hashtags: HashtagExtractor::short_form(),
        }
    }
}

impl FallbackGenerator {
    #[must_use]
    pub fn generate(&self, request: &GenerationRequest) -> String {
        let text = match request.platform {
            Platform::ShortForm => self.short_form(&request.content),
            Platform::Professional => professional(&request.content),
            Platform::Newsletter => newsletter(&request.content),
            Platform::Generic => truncate_chars(&request.content, GENERIC_LIMIT).to_string(),
        };
        debug!(
            platform = %request.platform,
            chars = char_len(&text),
            "fallback content generated"
        );
        text
    }

    fn short_form(&self, content: &str) -> String {
        let head = split_sentences(content)
            .first()
            .copied()
            .unwrap_or_else(|| truncate_chars(content, SHORT_FORM_HEAD_CHARS));

        let mut post = truncate_chars(head.trim(), PACK_LIMIT).trim_end().to_string();
        if !post.ends_with(['.', '!', '?']) {
            post.push('.');
        }

        let tags = self.hashtags.extract(content, SHORT_FORM_HASHTAGS);
        if !tags.is_empty() && char_len(&post) + 1 + char_len(&tags) <= POST_LIMIT {
            post.push(' ');
            post.push_str(&tags);
        }
        post
    }
}

fn professional(content: &str) -> String {
    let segments: Vec<&str> = content.split(". ").collect();
    let intro = if segments.len() > 1 {
        segments[0]
    } else {
        truncate_chars(content, PROFESSIONAL_INTRO_CHARS)
    };

    let mut post = format!("{}.\n\n", without_trailing_period(intro));
    for point in segments.iter().skip(1).take(PROFESSIONAL_MAX_POINTS) {
        post.push_str(&format!("• {}.\n", without_trailing_period(point)));
    }
    post.push('\n');
    post.push_str(PROFESSIONAL_HASHTAGS);

    truncate_chars(&post, PROFESSIONAL_LIMIT).to_string()
}

fn newsletter(content: &str) -> String {
    format!("Hello,\n\n{content}\n\nBest regards,\nContent Team")
        .trim()
        .to_string()
}

fn without_trailing_period(text: &str) -> &str {
    text.trim().trim_end_matches('.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn generate(platform: Platform, content: &str) -> String {
        FallbackGenerator::default().generate(&GenerationRequest::new(content, "", platform))
    }

    #[test]
    fn short_form_uses_first_sentence_and_hashtags() {
        let post = generate(
            Platform::ShortForm,
            "Our platform launch went great! Customers love the speed. More soon.",
        );
        assert_eq!(post, "Our platform launch went great. #Platform #Launch #Went");
    }

    #[test]
    fn short_form_truncates_long_sentences() {
        let content = "word ".repeat(120);
        let post = generate(Platform::ShortForm, &content);
        assert!(char_len(&post) <= POST_LIMIT);
        assert!(post.starts_with("word word"));
    }

    #[test]
    fn short_form_skips_hashtags_that_do_not_fit() {
        let content = format!("{} extraordinary", "a".repeat(260));
        let post = generate(Platform::ShortForm, &content);
        assert_eq!(char_len(&post), PACK_LIMIT + 1);
        assert!(post.ends_with('.'));
        assert!(!post.contains('#'));
    }

    #[test]
    fn short_form_falls_back_to_raw_head_without_sentences() {
        let post = generate(Platform::ShortForm, "...");
        assert_eq!(post, "...");
    }

    #[test]
    fn professional_builds_intro_bullets_and_tags() {
        let post = generate(
            Platform::Professional,
            "We grew 40% this year. Hiring doubled. Churn fell. NPS rose. Costs held.",
        );
        assert_eq!(
            post,
            "We grew 40% this year.\n\n• Hiring doubled.\n• Churn fell.\n• NPS rose.\n\n#ContentStrategy #DigitalMarketing"
        );
    }

    #[test]
    fn professional_without_split_uses_head_of_content() {
        let content = "x".repeat(4000);
        let post = generate(Platform::Professional, &content);
        assert!(post.starts_with(&format!("{}.\n\n", "x".repeat(500))));
        assert!(char_len(&post) <= PROFESSIONAL_LIMIT);
    }

    #[test]
    fn professional_is_capped() {
        let content = format!("{}. {}", "a".repeat(2000), "b".repeat(2000));
        let post = generate(Platform::Professional, &content);
        assert_eq!(char_len(&post), PROFESSIONAL_LIMIT);
    }

    #[test]
    fn newsletter_wraps_content() {
        let post = generate(Platform::Newsletter, "Big news this week.");
        assert_eq!(post, "Hello,\n\nBig news this week.\n\nBest regards,\nContent Team");
    }

    #[test]
    fn newsletter_keeps_the_content_edges_inside_the_template() {
        assert_eq!(
            generate(Platform::Newsletter, "  Big news this week.  "),
            "Hello,\n\n  Big news this week.  \n\nBest regards,\nContent Team"
        );
        assert_eq!(
            generate(Platform::Newsletter, "\n\nBody\n"),
            "Hello,\n\n\n\nBody\n\n\nBest regards,\nContent Team"
        );
    }

    #[test]
    fn generic_returns_head_of_content() {
        let content = "z".repeat(1500);
        assert_eq!(generate(Platform::Generic, &content), "z".repeat(1000));
    }

    #[rstest]
    #[case(Platform::ShortForm)]
    #[case(Platform::Professional)]
    #[case(Platform::Newsletter)]
    #[case(Platform::Generic)]
    fn non_empty_input_gives_non_empty_output(#[case] platform: Platform) {
        for content in ["x", "?", "Hello world", "a. b. c. d. e. f.", "日本語の文章です。"] {
            let text = generate(platform, content);
            assert!(!text.is_empty(), "{platform} produced empty text for {content:?}");
        }
    }
}
