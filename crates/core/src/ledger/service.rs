//! The in-memory ledger collection.

use wiremit_shared::types::{TransactionId, UserId};

use super::seed::generate_demo_history;
use super::types::{Transaction, TransactionStatus};

/// Ordered collection of transfer records, newest first.
#[derive(Debug, Default)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a ledger pre-populated with reproducible synthetic history.
    #[must_use]
    pub fn with_demo_history(seed: u64, user_id: UserId) -> Self {
        Self {
            transactions: generate_demo_history(seed, user_id),
        }
    }

    /// Inserts a transaction at the front.
    ///
    /// Newest-first ordering holds because submissions are stamped "now".
    pub fn append(&mut self, transaction: Transaction) {
        self.transactions.insert(0, transaction);
    }

    /// Mutates the status of the matching transaction in place.
    ///
    /// Unknown IDs are a silent no-op; returns whether a record was found.
    pub fn update_status(&mut self, id: TransactionId, status: TransactionStatus) -> bool {
        match self.transactions.iter_mut().find(|t| t.id == id) {
            Some(tx) => {
                tx.status = status;
                true
            }
            None => false,
        }
    }

    /// All transactions, newest first.
    #[must_use]
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Number of transactions held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// True when no transactions are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
