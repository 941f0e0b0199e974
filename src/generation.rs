//! Two-tier content generation: remote chat completion with a deterministic fallback.

pub mod error;
pub mod external;
pub mod fallback;
pub mod orchestrator;
pub(crate) mod prompts;

use async_trait::async_trait;

use crate::domain::GenerationRequest;

pub use error::{FailureKind, GenerationError, looks_like_error};
pub use external::{ChatCompletionClient, ChatCompletionConfig};
pub use fallback::FallbackGenerator;
pub use orchestrator::GenerationOrchestrator;

/// Primary-tier generator boundary.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError>;
}
