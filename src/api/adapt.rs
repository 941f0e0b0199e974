use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{
    app::AppState,
    domain::{Platform, UnknownPlatform},
    pipeline::AdaptRequest,
};

#[derive(Debug, Deserialize)]
pub(crate) struct AdaptPayload {
    #[serde(default)]
    content: String,
    #[serde(default)]
    instructions: Option<String>,
    #[serde(default)]
    platforms: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

pub(crate) async fn adapt_content(
    State(state): State<AppState>,
    Json(payload): Json<AdaptPayload>,
) -> Response {
    let platforms = match payload.platforms {
        Some(raw) => match parse_platforms(&raw) {
            Ok(platforms) => platforms,
            Err(error) => {
                warn!(%error, "adapt request named an unknown platform");
                return bad_request(error.to_string());
            }
        },
        None => Platform::SELECTABLE.to_vec(),
    };

    let request = AdaptRequest {
        content: payload.content,
        instructions: payload.instructions.unwrap_or_default(),
        platforms,
    };

    match state.pipeline().adapt(request).await {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(error) => {
            info!(%error, "adapt request rejected");
            bad_request(error.to_string())
        }
    }
}

/// Only caller-selectable platforms are accepted by name.
fn parse_platforms(raw: &[String]) -> Result<Vec<Platform>, UnknownPlatform> {
    raw.iter()
        .map(|name| match name.parse::<Platform>()? {
            Platform::Generic => Err(UnknownPlatform(name.clone())),
            platform => Ok(platform),
        })
        .collect()
}

fn bad_request(error: String) -> Response {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse { error })).into_response()
}
