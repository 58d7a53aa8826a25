//! Transaction domain types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use wiremit_shared::types::{Currency, TransactionId, UserId};

use crate::transfer::TransferQuote;

/// Lifecycle status of a transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    /// Submitted, not yet settled.
    Pending,
    /// Settled successfully.
    Completed,
    /// Settlement failed.
    Failed,
}

impl std::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Completed => write!(f, "completed"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

/// One money transfer record.
///
/// Immutable after creation except for `status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique transfer ID.
    pub id: TransactionId,
    /// The sending user.
    pub user_id: UserId,
    /// Amount the sender paid, in USD.
    pub amount: Decimal,
    /// Destination currency.
    pub currency: Currency,
    /// Recipient full name.
    pub recipient_name: String,
    /// Recipient email address.
    pub recipient_email: String,
    /// Platform fee, in USD.
    pub fee: Decimal,
    /// Exchange rate frozen at submission time.
    pub exchange_rate: Decimal,
    /// Amount received, in the destination currency.
    pub final_amount: Decimal,
    /// Lifecycle status.
    pub status: TransactionStatus,
    /// Submission timestamp.
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Builds a pending transaction from a computed quote.
    #[must_use]
    pub fn from_quote(
        user_id: UserId,
        quote: &TransferQuote,
        recipient_name: &str,
        recipient_email: &str,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            user_id,
            amount: quote.amount,
            currency: quote.currency,
            recipient_name: recipient_name.trim().to_string(),
            recipient_email: recipient_email.trim().to_string(),
            fee: quote.fee,
            exchange_rate: quote.exchange_rate,
            final_amount: quote.final_amount,
            status: TransactionStatus::Pending,
            created_at: Utc::now(),
        }
    }
}
