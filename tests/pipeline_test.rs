use std::sync::Arc;
use std::time::Duration;

use content_distributor::analysis::{
    ContentStats, HashtagExtractor, LexiconScorer, SentimentAnalyzer, SentimentLabel,
};
use content_distributor::domain::{GenerationRequest, GenerationSource, Platform};
use content_distributor::formatting::ThreadSplitter;
use content_distributor::formatting::thread::POST_LIMIT;
use content_distributor::generation::{
    ChatCompletionClient, ChatCompletionConfig, FallbackGenerator, GenerationOrchestrator,
};
use content_distributor::pipeline::{AdaptRequest, ContentPipeline};
use serde_json::json;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn slow_server(delay: Duration) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({
                    "choices": [{"message": {"role": "assistant", "content": "too late"}}]
                }))
                .set_delay(delay),
        )
        .mount(&server)
        .await;
    server
}

fn orchestrator_for(server: &MockServer, timeout: Duration) -> GenerationOrchestrator {
    let config = ChatCompletionConfig::new(format!("{}/chat/completions", server.uri()), "key")
        .with_timeout(timeout);
    let client = ChatCompletionClient::new(config).expect("client builds");
    GenerationOrchestrator::new(Arc::new(client), FallbackGenerator::default())
}

#[test]
fn praise_is_classified_positive() {
    let result =
        SentimentAnalyzer::<LexiconScorer>::default().analyze("Great product! Highly recommend.");

    assert_eq!(result.label, SentimentLabel::Positive);
    assert!(result.polarity > 0.1);
}

#[test]
fn short_text_is_a_single_unnumbered_post() {
    let posts = ThreadSplitter::default().split("It works.");

    assert_eq!(posts, vec!["It works.".to_string()]);
}

#[test]
fn long_single_sentence_becomes_numbered_thread() {
    let text = format!("{}.", vec!["alpha"; 70].join(" "));
    assert!(text.chars().count() >= 400);

    let posts = ThreadSplitter::default().split(&text);

    assert!(posts.len() >= 2);
    let total = posts.len();
    for (index, post) in posts.iter().enumerate() {
        assert!(post.chars().count() <= POST_LIMIT, "{post}");
        assert!(post.ends_with(&format!(" ({}/{total})", index + 1)), "{post}");
    }
}

#[test]
fn most_frequent_word_leads_hashtags() {
    let text = "data is big, data is new; data in, data out, my data set";

    let tags = HashtagExtractor::default().extract(text, 5);

    assert!(tags.starts_with("#data"), "{tags}");
}

#[test]
fn reading_time_tracks_word_count() {
    let stats = ContentStats::compute(&"word ".repeat(300));

    assert_eq!(stats.word_count, 300);
    assert!((stats.reading_time_minutes - 1.5).abs() < f64::EPSILON);
}

#[tokio::test]
async fn timeout_is_masked_by_fallback() {
    let server = slow_server(Duration::from_secs(2)).await;
    let orchestrator = orchestrator_for(&server, Duration::from_millis(100));

    for platform in Platform::SELECTABLE {
        let request = GenerationRequest::new(
            "Our team shipped a faster search engine. Latency dropped by half.",
            "",
            platform,
        );
        let result = orchestrator.generate(&request).await;

        assert_eq!(result.source, GenerationSource::Fallback);
        assert_eq!(result.text, FallbackGenerator::default().generate(&request));
    }
}

#[tokio::test]
async fn pipeline_survives_an_unreachable_service() {
    let server = slow_server(Duration::from_secs(2)).await;
    let pipeline = ContentPipeline::new(
        orchestrator_for(&server, Duration::from_millis(100)),
        SentimentAnalyzer::default(),
    );

    let report = pipeline
        .adapt(AdaptRequest {
            content: "Great news! We doubled our throughput this quarter. Thanks to everyone."
                .to_string(),
            instructions: "Celebrate the team".to_string(),
            platforms: Platform::SELECTABLE.to_vec(),
        })
        .await
        .expect("valid request");

    assert_eq!(report.source.sentiment.label, SentimentLabel::Positive);
    assert_eq!(report.variants.len(), 3);
    for variant in &report.variants {
        assert_eq!(variant.source, GenerationSource::Fallback);
        assert!(!variant.text().is_empty());
        assert_eq!(variant.segments.len(), variant.char_counts.len());
    }
    assert!(report.variants[0].char_counts.iter().all(|count| *count <= POST_LIMIT));
    assert!(report.variants[1].text().contains("#ContentStrategy #DigitalMarketing"));
    assert!(report.variants[2].text().starts_with("SUBJECT: Newsletter: Great news!"));
}
