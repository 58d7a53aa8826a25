//! Exchange rate routes.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::json;
use tracing::{error, info};

use crate::AppState;
use crate::rates::{RateFeed, RateFetchError};

/// Creates the rate routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/rates", get(get_rates))
        .route("/rates/refresh", post(refresh_rates))
}

fn feed_response(feed: &RateFeed) -> Response {
    match feed.snapshot {
        Some(snapshot) => (
            StatusCode::OK,
            Json(json!({
                "rates": snapshot,
                "last_updated": feed.last_updated,
                // Set when the newest fetch failed and these rates are stale
                "stale_error": feed.last_error,
            })),
        )
            .into_response(),
        None => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "error": "rates_unavailable",
                "message": feed
                    .last_error
                    .clone()
                    .unwrap_or_else(|| "Exchange rates have not been fetched yet".to_string()),
            })),
        )
            .into_response(),
    }
}

/// GET /rates - Current snapshot, stale or fresh.
async fn get_rates(State(state): State<AppState>) -> impl IntoResponse {
    feed_response(&state.rates.feed().await)
}

/// POST /rates/refresh - Force a fetch now (the manual retry action).
async fn refresh_rates(State(state): State<AppState>) -> impl IntoResponse {
    match state.rates.refresh().await {
        Ok(_) => {
            info!("manual rate refresh succeeded");
            feed_response(&state.rates.feed().await)
        }
        // Lost the race to a newer fetch; whatever won is current enough.
        Err(RateFetchError::Superseded) => feed_response(&state.rates.feed().await),
        Err(e) => {
            error!(error = %e, "manual rate refresh failed");
            (
                StatusCode::BAD_GATEWAY,
                Json(json!({
                    "error": "rate_fetch_failed",
                    "message": e.to_string(),
                })),
            )
                .into_response()
        }
    }
}
