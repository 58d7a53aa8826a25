//! Persistence layer for Wiremit.
//!
//! A single JSON document on disk holds the users collection, the
//! credentials map (email → Argon2 hash), and the single current-session
//! record. Repositories expose typed operations over the document.
//!
//! The transaction ledger is deliberately NOT stored here; history is
//! session-scoped and lives in memory only.

pub mod document;
pub mod error;
pub mod repositories;
pub mod store;

pub use error::StoreError;
pub use repositories::{SessionRepository, UserRepository};
pub use store::Store;
