//! Core value types shared by generation, formatting and the HTTP surface.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Target platform of a generated variant.
///
/// `Generic` is never offered to callers as a selection; it exists so that
/// the generators have an explicit arm for content without platform rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    #[serde(alias = "twitter", alias = "x")]
    ShortForm,
    #[serde(alias = "linkedin")]
    Professional,
    #[serde(alias = "email")]
    Newsletter,
    Generic,
}

impl Platform {
    /// Platforms a caller can select, in display order.
    pub const SELECTABLE: [Platform; 3] = [
        Platform::ShortForm,
        Platform::Professional,
        Platform::Newsletter,
    ];

    /// Name used inside prompts sent to the remote service.
    #[must_use]
    pub const fn prompt_name(self) -> &'static str {
        match self {
            Platform::ShortForm => "twitter",
            Platform::Professional => "linkedin",
            Platform::Newsletter => "newsletter",
            Platform::Generic => "generic",
        }
    }

    /// Hard character ceiling of a single published unit, if the platform has one.
    #[must_use]
    pub const fn max_length(self) -> Option<usize> {
        match self {
            Platform::ShortForm => Some(280),
            Platform::Professional => Some(3000),
            Platform::Newsletter => Some(5000),
            Platform::Generic => None,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Platform::ShortForm => "short_form",
            Platform::Professional => "professional",
            Platform::Newsletter => "newsletter",
            Platform::Generic => "generic",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown platform: {0}")]
pub struct UnknownPlatform(pub String);

impl FromStr for Platform {
    type Err = UnknownPlatform;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_lowercase().as_str() {
            "twitter" | "x" | "short_form" | "shortform" => Ok(Platform::ShortForm),
            "linkedin" | "professional" => Ok(Platform::Professional),
            "newsletter" | "email" => Ok(Platform::Newsletter),
            "generic" => Ok(Platform::Generic),
            _ => Err(UnknownPlatform(raw.to_string())),
        }
    }
}

/// One generation attempt for one platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub content: String,
    pub instructions: String,
    pub platform: Platform,
}

impl GenerationRequest {
    #[must_use]
    pub fn new(
        content: impl Into<String>,
        instructions: impl Into<String>,
        platform: Platform,
    ) -> Self {
        Self {
            content: content.into(),
            instructions: instructions.into(),
            platform,
        }
    }
}

/// Which tier produced a piece of generated text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationSource {
    Primary,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    pub platform: Platform,
    pub text: String,
    pub source: GenerationSource,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("twitter", Platform::ShortForm)]
    #[case(" Twitter ", Platform::ShortForm)]
    #[case("X", Platform::ShortForm)]
    #[case("LinkedIn", Platform::Professional)]
    #[case("newsletter", Platform::Newsletter)]
    #[case("email", Platform::Newsletter)]
    #[case("generic", Platform::Generic)]
    fn parses_platform_names(#[case] raw: &str, #[case] expected: Platform) {
        assert_eq!(raw.parse::<Platform>().expect("known platform"), expected);
    }

    #[test]
    fn rejects_unknown_platform_names() {
        let error = "myspace".parse::<Platform>().expect_err("unknown platform");
        assert_eq!(error, UnknownPlatform("myspace".to_string()));
    }

    #[test]
    fn serde_accepts_legacy_aliases() {
        let parsed: Vec<Platform> =
            serde_json::from_str(r#"["twitter","linkedin","newsletter","short_form"]"#)
                .expect("valid platforms");
        assert_eq!(
            parsed,
            vec![
                Platform::ShortForm,
                Platform::Professional,
                Platform::Newsletter,
                Platform::ShortForm
            ]
        );
        assert_eq!(
            serde_json::to_string(&Platform::Professional).expect("serialize"),
            r#""professional""#
        );
    }
}
