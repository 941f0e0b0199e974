//! Fault-tolerant generation: primary tier first, fallback on any failure.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use futures::future::join_all;
use tracing::{debug, warn};

use super::error::{FailureKind, looks_like_error};
use super::{ContentGenerator, FallbackGenerator};
use crate::domain::{GenerationRequest, GenerationResult, GenerationSource, Platform};

#[derive(Clone)]
pub struct GenerationOrchestrator {
    primary: Arc<dyn ContentGenerator>,
    fallback: FallbackGenerator,
    fan_out: bool,
}

impl std::fmt::Debug for GenerationOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerationOrchestrator")
            .field("fallback", &self.fallback)
            .field("fan_out", &self.fan_out)
            .finish_non_exhaustive()
    }
}

impl GenerationOrchestrator {
    pub fn new(primary: Arc<dyn ContentGenerator>, fallback: FallbackGenerator) -> Self {
        Self {
            primary,
            fallback,
            fan_out: true,
        }
    }

    /// Generate platforms one after another instead of concurrently.
    #[must_use]
    pub fn sequential(mut self) -> Self {
        self.fan_out = false;
        self
    }

    /// Exactly one primary attempt; any failure is masked by the fallback tier.
    pub async fn generate(&self, request: &GenerationRequest) -> GenerationResult {
        let outcome = AssertUnwindSafe(self.primary.generate(request))
            .catch_unwind()
            .await;

        let failure = match outcome {
            Ok(Ok(text)) if !looks_like_error(&text) => {
                debug!(platform = %request.platform, "primary generation succeeded");
                return GenerationResult {
                    platform: request.platform,
                    text,
                    source: GenerationSource::Primary,
                };
            }
            Ok(Ok(text)) => {
                warn!(
                    platform = %request.platform,
                    kind = ?FailureKind::ErrorText,
                    preview = %text.chars().take(80).collect::<String>(),
                    "primary returned error text, using fallback"
                );
                FailureKind::ErrorText
            }
            Ok(Err(error)) => {
                warn!(
                    platform = %request.platform,
                    kind = ?error.kind(),
                    %error,
                    "primary generation failed, using fallback"
                );
                error.kind()
            }
            Err(_) => {
                warn!(
                    platform = %request.platform,
                    kind = ?FailureKind::Panic,
                    "primary generation panicked, using fallback"
                );
                FailureKind::Panic
            }
        };

        debug!(platform = %request.platform, ?failure, "fallback tier engaged");
        GenerationResult {
            platform: request.platform,
            text: self.fallback.generate(request),
            source: GenerationSource::Fallback,
        }
    }

    /// Generates every platform, returning results in the order given.
    pub async fn generate_all(
        &self,
        content: &str,
        instructions: &str,
        platforms: &[Platform],
    ) -> Vec<GenerationResult> {
        let requests: Vec<GenerationRequest> = platforms
            .iter()
            .map(|&platform| GenerationRequest::new(content, instructions, platform))
            .collect();

        if self.fan_out {
            return join_all(requests.iter().map(|request| self.generate(request))).await;
        }

        let mut results = Vec::with_capacity(requests.len());
        for request in &requests {
            results.push(self.generate(request).await);
        }
        results
    }
}
