//! HTTP API layer with Axum routes and the rate provider client.
//!
//! This crate provides:
//! - REST API routes
//! - Shared application state
//! - The rate provider HTTP client and periodic refresh task

pub mod rates;
pub mod routes;

use axum::Router;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use wiremit_core::ledger::Ledger;
use wiremit_shared::AppConfig;
use wiremit_store::Store;

use crate::rates::RateService;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Persistent document store (users, credentials, session).
    pub store: Store,
    /// In-memory transaction ledger, newest first.
    pub ledger: Arc<RwLock<Ledger>>,
    /// Rate provider client and current snapshot.
    pub rates: Arc<RateService>,
    /// Application configuration.
    pub config: Arc<AppConfig>,
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
