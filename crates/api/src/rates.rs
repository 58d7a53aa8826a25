//! Rate provider client and snapshot state.
//!
//! Fetches USD-based rates from the provider, parses them through
//! `wiremit_core::rates`, and keeps the latest complete snapshot in memory.
//! A failed fetch records an error message and leaves the previous snapshot
//! untouched, so stale rates stay usable until a fetch succeeds.
//!
//! Overlapping fetches are ordered by a monotonic request counter: a fetch
//! only installs its result when no newer fetch has started, so a slow
//! response can never overwrite a fresher one.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use chrono::{DateTime, Utc};
use thiserror::Error;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use wiremit_core::rates::{RateError, RateSnapshot, parse_provider_response};
use wiremit_shared::config::RatesConfig;

/// Provider endpoint path for the rate list.
const RATES_PATH: &str = "/InterviewAPIS";

/// Errors from a single fetch attempt.
#[derive(Debug, Error)]
pub enum RateFetchError {
    /// The HTTP request failed or returned a non-success status.
    #[error("rate provider request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body did not yield a complete snapshot.
    #[error(transparent)]
    Parse(#[from] RateError),

    /// A newer fetch started while this one was in flight; its result was
    /// discarded without touching the feed.
    #[error("rate fetch superseded by a newer request")]
    Superseded,
}

/// The current rate feed: latest snapshot plus fetch bookkeeping.
#[derive(Debug, Clone, Default)]
pub struct RateFeed {
    /// Latest complete snapshot, if any fetch ever succeeded.
    pub snapshot: Option<RateSnapshot>,
    /// When the snapshot was installed.
    pub last_updated: Option<DateTime<Utc>>,
    /// Message from the most recent failed fetch, cleared on success.
    pub last_error: Option<String>,
}

/// Rate provider client plus the shared feed state.
#[derive(Debug)]
pub struct RateService {
    http: reqwest::Client,
    endpoint: String,
    feed: RwLock<RateFeed>,
    fetch_seq: AtomicU64,
}

impl RateService {
    /// Builds the client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: &RatesConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            endpoint: format!("{}{RATES_PATH}", config.provider_url.trim_end_matches('/')),
            feed: RwLock::new(RateFeed::default()),
            fetch_seq: AtomicU64::new(0),
        })
    }

    /// The full provider endpoint URL.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns a copy of the current feed state.
    pub async fn feed(&self) -> RateFeed {
        self.feed.read().await.clone()
    }

    /// Returns the current snapshot, if one was ever installed.
    pub async fn snapshot(&self) -> Option<RateSnapshot> {
        self.feed.read().await.snapshot
    }

    /// Installs a snapshot directly, bypassing the provider.
    ///
    /// Used when rates are supplied out of band (offline demos, tests).
    pub async fn install_snapshot(&self, snapshot: RateSnapshot) {
        let mut feed = self.feed.write().await;
        feed.snapshot = Some(snapshot);
        feed.last_updated = Some(Utc::now());
        feed.last_error = None;
    }

    /// Fetches fresh rates and installs them as the new snapshot.
    ///
    /// On failure the previous snapshot is retained and the error message
    /// recorded for display. A fetch that lost the race to a newer one
    /// returns `Superseded` and leaves the feed alone.
    ///
    /// # Errors
    ///
    /// Returns `RateFetchError` on transport failure, unusable response, or
    /// supersession.
    pub async fn refresh(&self) -> Result<RateSnapshot, RateFetchError> {
        let ticket = self.fetch_seq.fetch_add(1, Ordering::SeqCst) + 1;
        let outcome = self.fetch_once().await;

        let mut feed = self.feed.write().await;
        if self.fetch_seq.load(Ordering::SeqCst) != ticket {
            debug!(ticket, "discarding superseded rate fetch");
            return Err(RateFetchError::Superseded);
        }

        match outcome {
            Ok(snapshot) => {
                // Wholesale replacement; snapshots are never merged.
                feed.snapshot = Some(snapshot);
                feed.last_updated = Some(Utc::now());
                feed.last_error = None;
                info!(gbp = %snapshot.gbp, zar = %snapshot.zar, "rate snapshot updated");
                Ok(snapshot)
            }
            Err(e) => {
                feed.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    async fn fetch_once(&self) -> Result<RateSnapshot, RateFetchError> {
        let body: serde_json::Value = self
            .http
            .get(&self.endpoint)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(parse_provider_response(&body)?)
    }
}

/// Spawns the periodic refresh task.
///
/// The first tick fires immediately (initial load), then every `interval`.
/// Abort the returned handle on shutdown.
pub fn spawn_refresh_task(
    rates: std::sync::Arc<RateService>,
    interval: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        loop {
            ticker.tick().await;
            if let Err(e) = rates.refresh().await {
                warn!(error = %e, "rate refresh failed, keeping previous snapshot");
            }
        }
    })
}
