//! Money transfer routes: quoting and submission.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};
use wiremit_shared::types::Currency;

use crate::AppState;
use crate::routes::{internal_error, validation_response};
use wiremit_core::ledger::Transaction;
use wiremit_core::transfer::{SendMoneyInput, quote, validate_quote, validate_send_money};
use wiremit_core::validation::{FieldError, ValidationErrors, ValidationKind};
use wiremit_store::SessionRepository;

/// Creates the transfer routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/transfers/quote", post(quote_transfer))
        .route("/transfers", post(create_transfer))
}

/// Request body for a quote.
#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    /// Amount in USD.
    pub amount: Option<Decimal>,
    /// Destination currency code.
    pub currency: Option<String>,
}

/// Request body for submitting a transfer.
#[derive(Debug, Deserialize)]
pub struct SendMoneyRequest {
    /// Amount in USD.
    pub amount: Option<Decimal>,
    /// Destination currency code.
    pub currency: Option<String>,
    /// Recipient full name.
    #[serde(default)]
    pub recipient_name: String,
    /// Recipient email address.
    #[serde(default)]
    pub recipient_email: String,
}

/// Parses the currency field, treating an unsupported code as a field error
/// rather than a deserialization failure.
fn parse_currency(raw: Option<&str>) -> Result<Option<Currency>, ValidationErrors> {
    match raw {
        None => Ok(None),
        Some(code) => match code.parse::<Currency>() {
            Ok(currency) => Ok(Some(currency)),
            Err(_) => Err(ValidationErrors(vec![FieldError::new(
                "currency",
                ValidationKind::InvalidChoice,
            )])),
        },
    }
}

fn rates_unavailable() -> Response {
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(json!({
            "error": "rates_unavailable",
            "message": "Exchange rates are unavailable, try again shortly"
        })),
    )
        .into_response()
}

/// POST /transfers/quote - Fee/conversion breakdown without submitting.
async fn quote_transfer(
    State(state): State<AppState>,
    Json(payload): Json<QuoteRequest>,
) -> impl IntoResponse {
    let currency = match parse_currency(payload.currency.as_deref()) {
        Ok(c) => c,
        Err(errors) => return validation_response(&errors),
    };
    let (amount, currency) = match validate_quote(payload.amount, currency) {
        Ok(pair) => pair,
        Err(errors) => return validation_response(&errors),
    };

    let Some(snapshot) = state.rates.snapshot().await else {
        return rates_unavailable();
    };

    let q = quote(amount, currency, &snapshot);
    (StatusCode::OK, Json(json!({ "quote": q }))).into_response()
}

/// POST /transfers - Validate, quote at the current snapshot, and append a
/// pending transaction to the ledger.
async fn create_transfer(
    State(state): State<AppState>,
    Json(payload): Json<SendMoneyRequest>,
) -> impl IntoResponse {
    let sender = match SessionRepository::new(state.store.clone()).current().await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return (
                StatusCode::UNAUTHORIZED,
                Json(json!({
                    "error": "no_session",
                    "message": "Sign in to send money"
                })),
            )
                .into_response();
        }
        Err(e) => {
            error!(error = %e, "Store error reading session");
            return internal_error();
        }
    };

    let currency = match parse_currency(payload.currency.as_deref()) {
        Ok(c) => c,
        Err(errors) => return validation_response(&errors),
    };
    let input = SendMoneyInput {
        amount: payload.amount,
        currency,
        recipient_name: payload.recipient_name.clone(),
        recipient_email: payload.recipient_email.clone(),
    };
    let (amount, currency) = match validate_send_money(&input) {
        Ok(pair) => pair,
        Err(errors) => return validation_response(&errors),
    };

    let Some(snapshot) = state.rates.snapshot().await else {
        return rates_unavailable();
    };

    let q = quote(amount, currency, &snapshot);
    let transaction = Transaction::from_quote(
        sender.id,
        &q,
        &payload.recipient_name,
        &payload.recipient_email,
    );

    info!(
        transaction_id = %transaction.id,
        user_id = %sender.id,
        amount = %transaction.amount,
        currency = %transaction.currency,
        final_amount = %transaction.final_amount,
        "Transfer submitted"
    );

    state.ledger.write().await.append(transaction.clone());

    (
        StatusCode::CREATED,
        Json(json!({ "transaction": transaction })),
    )
        .into_response()
}
