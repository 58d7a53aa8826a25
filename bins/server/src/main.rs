//! Wiremit API Server
//!
//! Main entry point for the Wiremit money transfer backend.

use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wiremit_api::rates::{RateService, spawn_refresh_task};
use wiremit_api::{AppState, create_router};
use wiremit_core::ledger::Ledger;
use wiremit_shared::AppConfig;
use wiremit_shared::types::UserId;
use wiremit_store::{SessionRepository, Store};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wiremit=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Open the document store
    let store = Store::open(&config.store.path).await?;
    info!(path = %config.store.path, "Document store opened");

    // Build the ledger, seeded with synthetic history when configured.
    // Seeded rows belong to the restored session user when one exists so
    // they show up as that user's history.
    let ledger = if config.ledger.seed_demo_data {
        let owner = SessionRepository::new(store.clone())
            .current()
            .await?
            .map_or_else(UserId::new, |user| user.id);
        let ledger = Ledger::with_demo_history(config.ledger.demo_seed, owner);
        info!(
            seed = config.ledger.demo_seed,
            transactions = ledger.len(),
            "Seeded demo transaction history"
        );
        ledger
    } else {
        Ledger::new()
    };

    // Create the rate provider client and start the periodic refresh.
    // The first tick fires immediately, so this also covers the initial load.
    let rates = Arc::new(RateService::new(&config.rates)?);
    let refresh_task = spawn_refresh_task(
        Arc::clone(&rates),
        Duration::from_secs(config.rates.refresh_interval_secs),
    );
    info!(endpoint = %rates.endpoint(), "Rate refresh task started");

    // Create application state
    let state = AppState {
        store,
        ledger: Arc::new(RwLock::new(ledger)),
        rates,
        config: Arc::new(config.clone()),
    };

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    refresh_task.abort();

    Ok(())
}
