//! Health check endpoint.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::AppState;

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: &'static str,
    /// Service version.
    pub version: &'static str,
    /// Rate feed readiness: "ready" once a snapshot is installed.
    pub rates: &'static str,
}

/// Health check handler.
///
/// Always reports healthy while the process is serving; the `rates` field
/// tells probes whether transfers can be quoted yet.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let rates = if state.rates.snapshot().await.is_some() {
        "ready"
    } else {
        "pending"
    };

    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        rates,
    })
}

/// Creates health check routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
