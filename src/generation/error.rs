use serde::Serialize;
use thiserror::Error;

/// Maximum length of an upstream error body kept in an error message.
pub(crate) const MAX_ERROR_MESSAGE_LENGTH: usize = 500;

/// Text prefixes that identify a failed generation rendered as a string.
pub const ERROR_PREFIXES: [&str; 4] = [
    "Error",
    "HTTP Error",
    "Request Error",
    "Unexpected API response format",
];

/// Failure of the remote generation boundary.
///
/// The `Display` output keeps the prefixes callers of the text protocol expect.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("HTTP Error: {status} - {body}")]
    Http { status: u16, body: String },
    #[error("Request Error: {0}")]
    Request(String),
    #[error("Unexpected API response format: {0}")]
    UnexpectedFormat(String),
    #[error("Error generating content: {0}")]
    Other(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    Http,
    Network,
    MalformedResponse,
    Unexpected,
    /// Primary produced text that reads as an error message.
    ErrorText,
    /// Primary generator panicked.
    Panic,
}

impl GenerationError {
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match self {
            GenerationError::Http { .. } => FailureKind::Http,
            GenerationError::Request(_) => FailureKind::Network,
            GenerationError::UnexpectedFormat(_) => FailureKind::MalformedResponse,
            GenerationError::Other(_) => FailureKind::Unexpected,
        }
    }
}

/// Whether generated text is really an error message in disguise.
#[must_use]
pub fn looks_like_error(text: &str) -> bool {
    ERROR_PREFIXES.iter().any(|prefix| text.starts_with(prefix))
}

/// エラーメッセージを要約して切り詰める。
pub(crate) fn truncate_error_message(msg: &str) -> String {
    let char_count = msg.chars().count();
    if char_count <= MAX_ERROR_MESSAGE_LENGTH {
        return msg.to_string();
    }
    let truncated: String = msg.chars().take(MAX_ERROR_MESSAGE_LENGTH).collect();
    format!("{truncated}... (truncated, {char_count} chars)")
}
