use axum::Json;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Serialize)]
pub(crate) struct HealthReport {
    status: &'static str,
}

/// The fallback tier needs no external resource, so readiness never degrades.
pub(crate) async fn ready() -> Json<HealthReport> {
    debug!("service ready probe");
    Json(HealthReport { status: "ready" })
}

pub(crate) async fn live() -> Json<HealthReport> {
    debug!("service live probe");
    Json(HealthReport { status: "live" })
}
