//! API route definitions.

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use wiremit_core::validation::ValidationErrors;
use wiremit_shared::AppError;

use crate::AppState;

pub mod auth;
pub mod health;
pub mod rates;
pub mod transactions;
pub mod transfers;

/// Renders field validation failures as a 422 response.
///
/// Fields keep their declaration order so clients can surface the topmost
/// offending field first.
pub(crate) fn validation_response(errors: &ValidationErrors) -> Response {
    let fields: Vec<_> = errors
        .0
        .iter()
        .map(|e| {
            json!({
                "field": e.field,
                "kind": e.kind,
                "message": e.kind.message(),
            })
        })
        .collect();

    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({
            "error": "validation_error",
            "message": "One or more fields are invalid",
            "fields": fields,
        })),
    )
        .into_response()
}

/// Renders an application error as its mapped status and code.
pub(crate) fn error_response(err: &AppError) -> Response {
    let status = StatusCode::from_u16(err.status_code())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        Json(json!({
            "error": err.error_code(),
            "message": err.message(),
        })),
    )
        .into_response()
}

/// Renders an opaque 500 for unexpected internal failures.
pub(crate) fn internal_error() -> Response {
    error_response(&AppError::Internal("An error occurred".to_string()))
}

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(auth::routes())
        .merge(rates::routes())
        .merge(transfers::routes())
        .merge(transactions::routes())
}
