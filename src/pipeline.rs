//! End-to-end adaptation of one source text into platform variants.

use std::collections::HashSet;
use std::time::Instant;

use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::analysis::{AnalysisResult, ContentStats, SentimentAnalyzer};
use crate::domain::{GenerationResult, GenerationSource, Platform};
use crate::formatting::{LinkedInFormatter, NewsletterFormatter, ThreadSplitter};
use crate::generation::GenerationOrchestrator;
use crate::util::text::char_len;

/// Caller input rejected before any generation attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter some content to generate platform-specific versions.")]
    EmptyContent,
    #[error("Please select at least one platform.")]
    NoPlatformSelected,
}

#[derive(Debug, Clone)]
pub struct AdaptRequest {
    pub content: String,
    pub instructions: String,
    pub platforms: Vec<Platform>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TextReport {
    pub stats: ContentStats,
    pub sentiment: AnalysisResult,
}

/// Final formatted output for one platform.
#[derive(Debug, Clone, Serialize)]
pub struct PlatformVariant {
    pub platform: Platform,
    pub source: GenerationSource,
    /// One entry per publishable unit; a thread has several, other platforms one.
    pub segments: Vec<String>,
    pub char_counts: Vec<usize>,
    /// Every segment fits the platform's character ceiling.
    pub within_limit: bool,
    pub analysis: TextReport,
}

impl PlatformVariant {
    #[must_use]
    pub fn text(&self) -> String {
        self.segments.join("\n\n")
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AdaptReport {
    pub source: TextReport,
    pub variants: Vec<PlatformVariant>,
}

#[derive(Debug, Clone)]
pub struct ContentPipeline {
    orchestrator: GenerationOrchestrator,
    analyzer: SentimentAnalyzer,
    thread: ThreadSplitter,
    professional: LinkedInFormatter,
    newsletter: NewsletterFormatter,
}

impl ContentPipeline {
    #[must_use]
    pub fn new(orchestrator: GenerationOrchestrator, analyzer: SentimentAnalyzer) -> Self {
        Self {
            orchestrator,
            analyzer,
            thread: ThreadSplitter::default(),
            professional: LinkedInFormatter::default(),
            newsletter: NewsletterFormatter,
        }
    }

    /// # Errors
    /// Returns [`ValidationError`] for blank content or an empty platform selection.
    pub async fn adapt(&self, request: AdaptRequest) -> Result<AdaptReport, ValidationError> {
        if request.content.trim().is_empty() {
            return Err(ValidationError::EmptyContent);
        }
        let platforms = dedupe_platforms(&request.platforms);
        if platforms.is_empty() {
            return Err(ValidationError::NoPlatformSelected);
        }

        let started = Instant::now();
        let source = self.report(&request.content);

        let generated = self
            .orchestrator
            .generate_all(&request.content, &request.instructions, &platforms)
            .await;

        let variants: Vec<PlatformVariant> = generated
            .into_iter()
            .map(|result| self.render(&request.content, result))
            .collect();

        info!(
            platforms = variants.len(),
            fallbacks = variants
                .iter()
                .filter(|variant| variant.source == GenerationSource::Fallback)
                .count(),
            source_words = source.stats.word_count,
            elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            "content adapted"
        );

        Ok(AdaptReport { source, variants })
    }

    fn render(&self, source: &str, generated: GenerationResult) -> PlatformVariant {
        let segments = match generated.platform {
            Platform::ShortForm => self.thread.split(&generated.text),
            Platform::Professional => vec![self.professional.format(&generated.text)],
            Platform::Newsletter => vec![
                self.newsletter
                    .format(&generated.text, &NewsletterFormatter::subject_for(source)),
            ],
            Platform::Generic => vec![generated.text],
        };

        let char_counts: Vec<usize> = segments.iter().map(|segment| char_len(segment)).collect();
        let within_limit = generated
            .platform
            .max_length()
            .is_none_or(|limit| char_counts.iter().all(|count| *count <= limit));
        let analysis = self.report(&segments.join("\n\n"));

        PlatformVariant {
            platform: generated.platform,
            source: generated.source,
            segments,
            char_counts,
            within_limit,
            analysis,
        }
    }

    fn report(&self, text: &str) -> TextReport {
        TextReport {
            stats: ContentStats::compute(text),
            sentiment: self.analyzer.analyze(text),
        }
    }
}

/// Drops repeated platforms, keeping first-selection order.
fn dedupe_platforms(platforms: &[Platform]) -> Vec<Platform> {
    let mut seen = HashSet::new();
    platforms
        .iter()
        .copied()
        .filter(|platform| seen.insert(*platform))
        .collect()
}
