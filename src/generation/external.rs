//! Chat-completion client for the primary generation tier.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::error::{GenerationError, truncate_error_message};
use super::{ContentGenerator, prompts};
use crate::domain::GenerationRequest;

pub const DEFAULT_ENDPOINT: &str = "https://api.perplexity.ai/chat/completions";
pub const DEFAULT_MODEL: &str = "llama-3.1-sonar-large-128k-online";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_TEMPERATURE: f64 = 0.7;
pub const DEFAULT_MAX_TOKENS: u32 = 2000;
pub const DEFAULT_TOP_P: f64 = 0.9;

#[derive(Debug, Clone)]
pub struct ChatCompletionConfig {
    pub endpoint: String,
    pub api_key: String,
    pub model: String,
    pub timeout: Duration,
    pub temperature: f64,
    pub max_tokens: u32,
    pub top_p: f64,
}

impl ChatCompletionConfig {
    /// Service defaults for everything but the endpoint and credential.
    #[must_use]
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            top_p: DEFAULT_TOP_P,
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f64,
    max_tokens: u32,
    top_p: f64,
    stream: bool,
}

/// One blocking request per generation; no retries.
#[derive(Debug, Clone)]
pub struct ChatCompletionClient {
    client: Client,
    endpoint: Url,
    config: ChatCompletionConfig,
}

impl ChatCompletionClient {
    /// # Errors
    /// Returns an error when the endpoint is not a valid URL or the HTTP client cannot be built.
    pub fn new(config: ChatCompletionConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .context("failed to build chat-completion client")?;

        let endpoint = Url::parse(&config.endpoint).context("invalid chat-completion endpoint")?;

        Ok(Self {
            client,
            endpoint,
            config,
        })
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.config.model
    }

    async fn complete(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        let user_prompt =
            prompts::user_prompt(request.platform, &request.content, &request.instructions);
        let body = ChatCompletionRequest {
            model: &self.config.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: prompts::system_prompt(request.platform),
                },
                ChatMessage {
                    role: "user",
                    content: &user_prompt,
                },
            ],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
            top_p: self.config.top_p,
            stream: false,
        };

        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|error| self.transport_error(&error))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Http {
                status: status.as_u16(),
                body: truncate_error_message(&body),
            });
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|error| self.transport_error(&error))?;

        extract_content(&payload)
    }

    fn transport_error(&self, error: &reqwest::Error) -> GenerationError {
        if error.is_builder() {
            GenerationError::Other(error.to_string())
        } else if error.is_timeout() {
            GenerationError::Request(format!(
                "timed out after {}s: {error}",
                self.config.timeout.as_secs_f64()
            ))
        } else {
            GenerationError::Request(error.to_string())
        }
    }
}

#[async_trait]
impl ContentGenerator for ChatCompletionClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        let started = Instant::now();
        debug!(
            platform = %request.platform,
            model = %self.config.model,
            content_chars = request.content.chars().count(),
            "sending chat-completion request"
        );

        let result = self.complete(request).await;

        debug!(
            platform = %request.platform,
            ok = result.is_ok(),
            elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            "chat-completion request finished"
        );
        result
    }
}

/// Pulls `choices[0].message.content` out of a completion payload.
fn extract_content(payload: &Value) -> Result<String, GenerationError> {
    let choices = payload
        .get("choices")
        .ok_or_else(|| GenerationError::UnexpectedFormat("'choices'".to_string()))?;
    let first = choices
        .get(0)
        .ok_or_else(|| GenerationError::UnexpectedFormat("'choices[0]'".to_string()))?;
    let message = first
        .get("message")
        .ok_or_else(|| GenerationError::UnexpectedFormat("'message'".to_string()))?;
    let content = message
        .get("content")
        .ok_or_else(|| GenerationError::UnexpectedFormat("'content'".to_string()))?;

    content.as_str().map(str::to_string).ok_or_else(|| {
        GenerationError::UnexpectedFormat(format!("content is not a string: {content}"))
    })
}
