use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tracing::info;

use crate::{
    analysis::SentimentAnalyzer,
    api,
    config::Config,
    generation::{ChatCompletionClient, ContentGenerator, FallbackGenerator, GenerationOrchestrator},
    pipeline::ContentPipeline,
};

#[derive(Clone)]
pub(crate) struct AppState {
    registry: Arc<ComponentRegistry>,
}

pub struct ComponentRegistry {
    config: Arc<Config>,
    pipeline: Arc<ContentPipeline>,
}

impl AppState {
    pub(crate) fn new(registry: ComponentRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    pub(crate) fn pipeline(&self) -> Arc<ContentPipeline> {
        Arc::clone(&self.registry.pipeline)
    }
}

impl ComponentRegistry {
    /// 構成情報から生成クライアントとパイプラインを組み立て、共有レジストリを構築する。
    ///
    /// # Errors
    /// チャット補完クライアントの構築（エンドポイント URL の検証を含む）に失敗した場合はエラーを返す。
    pub fn build(config: Config) -> Result<Self> {
        let client = ChatCompletionClient::new(config.chat_completion_config())
            .context("failed to build chat-completion client")?;
        info!(
            model = client.model(),
            endpoint = config.api_url(),
            timeout_secs = config.request_timeout().as_secs(),
            fan_out = config.platform_fan_out(),
            "chat-completion client configured"
        );
        Ok(Self::with_primary(config, Arc::new(client)))
    }

    /// Wires the pipeline around an arbitrary primary generator.
    #[must_use]
    pub fn with_primary(config: Config, primary: Arc<dyn ContentGenerator>) -> Self {
        let mut orchestrator = GenerationOrchestrator::new(primary, FallbackGenerator::default());
        if !config.platform_fan_out() {
            orchestrator = orchestrator.sequential();
        }
        let pipeline = ContentPipeline::new(orchestrator, SentimentAnalyzer::default());

        Self {
            config: Arc::new(config),
            pipeline: Arc::new(pipeline),
        }
    }

    #[must_use]
    pub fn config(&self) -> Arc<Config> {
        Arc::clone(&self.config)
    }

    #[must_use]
    pub fn pipeline(&self) -> Arc<ContentPipeline> {
        Arc::clone(&self.pipeline)
    }
}

pub fn build_router(registry: ComponentRegistry) -> Router {
    let state = AppState::new(registry);
    api::router(state)
}
