use crate::util::text::truncate_chars;

const SUBJECT_PREVIEW_CHARS: usize = 50;
const SIGN_OFF: &str = "Best regards,\nContent Distribution Team";

/// Fixed e-mail newsletter template.
#[derive(Debug, Clone, Copy, Default)]
pub struct NewsletterFormatter;

impl NewsletterFormatter {
    #[must_use]
    pub fn format(&self, text: &str, subject_line: &str) -> String {
        format!("SUBJECT: {subject_line}\n\n{text}\n\n---\n{SIGN_OFF}\n")
    }

    /// Subject derived from the first 50 characters of the source content.
    #[must_use]
    pub fn subject_for(source: &str) -> String {
        if source.is_empty() {
            return "Newsletter Update".to_string();
        }
        format!(
            "Newsletter: {}...",
            truncate_chars(source, SUBJECT_PREVIEW_CHARS)
        )
    }
}
