//! FX rate snapshots and provider response parsing.
//!
//! The rate provider returns a JSON array of records, each optionally
//! carrying numeric `USD`/`GBP`/`ZAR`/`USDT` fields. Parsing scans the whole
//! array and keeps the last non-zero value seen per currency, then validates
//! that both transfer corridors (GBP, ZAR) are covered.

pub mod error;
pub mod parse;
pub mod snapshot;

pub use error::RateError;
pub use parse::parse_provider_response;
pub use snapshot::RateSnapshot;
