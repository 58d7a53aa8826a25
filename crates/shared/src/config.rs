//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    pub server: ServerConfig,
    /// Persistent store configuration.
    pub store: StoreConfig,
    /// Rate provider configuration.
    pub rates: RatesConfig,
    /// Auth behaviour configuration.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Demo ledger seeding configuration.
    #[serde(default)]
    pub ledger: LedgerConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Persistent store configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Path of the JSON document file backing the store.
    #[serde(default = "default_store_path")]
    pub path: String,
}

fn default_store_path() -> String {
    "data/wiremit.json".to_string()
}

/// Rate provider configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RatesConfig {
    /// Base URL of the rate provider API.
    pub provider_url: String,
    /// HTTP timeout for provider requests, in seconds.
    #[serde(default = "default_rates_timeout")]
    pub timeout_secs: u64,
    /// Interval between automatic rate refreshes, in seconds.
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_secs: u64,
}

fn default_rates_timeout() -> u64 {
    10
}

fn default_refresh_interval() -> u64 {
    300 // 5 minutes
}

/// Auth behaviour configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Artificial delay applied to sign-up/sign-in, in milliseconds.
    ///
    /// Mirrors the latency of a hosted auth backend for demo purposes.
    /// Set to 0 in tests.
    #[serde(default = "default_auth_latency")]
    pub simulated_latency_ms: u64,
}

fn default_auth_latency() -> u64 {
    1000
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            simulated_latency_ms: default_auth_latency(),
        }
    }
}

/// Demo ledger seeding configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LedgerConfig {
    /// Whether to seed the in-memory ledger with synthetic history on boot.
    #[serde(default = "default_seed_demo_data")]
    pub seed_demo_data: bool,
    /// PRNG seed for the synthetic history, kept explicit for reproducibility.
    #[serde(default = "default_demo_seed")]
    pub demo_seed: u64,
}

fn default_seed_demo_data() -> bool {
    true
}

fn default_demo_seed() -> u64 {
    42
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            seed_demo_data: default_seed_demo_data(),
            demo_seed: default_demo_seed(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("WIREMIT").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
