//! Reproducible synthetic transaction history.
//!
//! Exists purely to make the product demonstrable without a real payment
//! backend. The generator takes an explicit PRNG seed so tests and demo
//! environments get identical history.

use chrono::{Duration, Utc};
use rand::{Rng, SeedableRng, rngs::StdRng};
use rust_decimal::Decimal;
use wiremit_shared::types::{Currency, UserId};

use super::types::{Transaction, TransactionStatus};
use crate::rates::RateSnapshot;
use crate::transfer::quote;

/// Fixed illustrative rates used for the synthetic history.
fn demo_rates() -> RateSnapshot {
    RateSnapshot {
        usd: Decimal::ONE,
        gbp: Decimal::new(74, 2),    // 0.74
        zar: Decimal::new(1775, 2),  // 17.75
        usdt: Decimal::ONE,
    }
}

/// Recipient roster for the synthetic history.
const RECIPIENTS: [&str; 15] = [
    "John Smith",
    "Sarah Johnson",
    "Michael Brown",
    "Emma Wilson",
    "David Lee",
    "Lisa Davis",
    "James Miller",
    "Anna Taylor",
    "Robert Anderson",
    "Maria Garcia",
    "William Jones",
    "Jennifer White",
    "Christopher Martin",
    "Jessica Thompson",
    "Daniel Rodriguez",
];

const SECONDS_PER_30_DAYS: i64 = 30 * 24 * 60 * 60;

/// Generates 15 synthetic transactions, sorted newest first.
///
/// Amounts are whole dollars in [100, 2100), currency is a coin flip,
/// fee/conversion go through the same quote formula as live transfers at
/// the fixed demo rates, status is completed with probability 0.9 else
/// pending, and timestamps are uniform over the preceding 30 days.
/// Deterministic for a given `seed`.
#[must_use]
pub fn generate_demo_history(seed: u64, user_id: UserId) -> Vec<Transaction> {
    let mut rng = StdRng::seed_from_u64(seed);
    let rates = demo_rates();
    let now = Utc::now();

    let mut transactions: Vec<Transaction> = RECIPIENTS
        .iter()
        .map(|recipient| {
            let currency = if rng.random_bool(0.5) {
                Currency::Gbp
            } else {
                Currency::Zar
            };
            let amount = Decimal::from(rng.random_range(100u32..2100));
            let q = quote(amount, currency, &rates);

            let status = if rng.random_bool(0.9) {
                TransactionStatus::Completed
            } else {
                TransactionStatus::Pending
            };
            let age = Duration::seconds(rng.random_range(0..SECONDS_PER_30_DAYS));

            let email = format!("{}@email.com", recipient.to_lowercase().replace(' ', "."));
            let mut tx = Transaction::from_quote(user_id, &q, recipient, &email);
            tx.status = status;
            tx.created_at = now - age;
            tx
        })
        .collect();

    transactions.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    transactions
}
