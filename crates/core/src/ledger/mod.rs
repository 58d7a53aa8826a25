//! In-memory transaction history.
//!
//! The ledger is session-scoped: it lives for the lifetime of the process
//! and is not persisted. Ordering is newest-first by creation time, which
//! `append` maintains because submission time is always "now".

pub mod seed;
pub mod service;
pub mod types;

pub use seed::generate_demo_history;
pub use service::Ledger;
pub use types::{Transaction, TransactionStatus};
