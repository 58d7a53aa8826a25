//! Transaction history routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch},
};
use serde::Deserialize;
use serde_json::json;
use tracing::info;
use wiremit_shared::types::{PageRequest, PageResponse, TransactionId};

use crate::AppState;
use wiremit_core::ledger::TransactionStatus;

/// Creates the transaction routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/transactions", get(list_transactions))
        .route("/transactions/{id}/status", patch(update_status))
}

/// GET /transactions - Paginated history, newest first.
async fn list_transactions(
    State(state): State<AppState>,
    Query(page): Query<PageRequest>,
) -> impl IntoResponse {
    let ledger = state.ledger.read().await;
    let all = ledger.transactions();
    let total = all.len() as u64;

    let data: Vec<_> = all
        .iter()
        .skip(page.offset())
        .take(page.limit())
        .cloned()
        .collect();

    Json(PageResponse::new(data, page.page, page.per_page, total))
}

/// Request body for a status change.
#[derive(Debug, Deserialize)]
struct UpdateStatusRequest {
    status: TransactionStatus,
}

/// PATCH /transactions/{id}/status - Mark a transaction settled or failed.
async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<TransactionId>,
    Json(payload): Json<UpdateStatusRequest>,
) -> impl IntoResponse {
    let found = state.ledger.write().await.update_status(id, payload.status);
    if found {
        info!(transaction_id = %id, status = %payload.status, "Transaction status updated");
        StatusCode::NO_CONTENT.into_response()
    } else {
        (
            StatusCode::NOT_FOUND,
            Json(json!({
                "error": "transaction_not_found",
                "message": "No transaction with that ID"
            })),
        )
            .into_response()
    }
}
