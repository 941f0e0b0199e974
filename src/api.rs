pub(crate) mod adapt;
pub(crate) mod health;

use axum::{
    Router,
    routing::{get, post},
};

use crate::app::AppState;

pub(crate) fn router(state: AppState) -> Router {
    Router::new()
        .route("/health/ready", get(health::ready))
        .route("/health/live", get(health::live))
        .route("/v1/content/adapt", post(adapt::adapt_content))
        .with_state(state)
}
