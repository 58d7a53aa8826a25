//! The transfer quote calculator.

use rust_decimal::Decimal;
use serde::Serialize;
use wiremit_shared::types::Currency;

use crate::rates::RateSnapshot;

/// Breakdown of a single USD → GBP/ZAR transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TransferQuote {
    /// Amount the sender pays, in USD.
    pub amount: Decimal,
    /// Platform fee retained, in USD.
    pub fee: Decimal,
    /// Fee rate as a percentage, for display.
    pub fee_percent: Decimal,
    /// Amount converted after the fee, in USD.
    pub amount_after_fee: Decimal,
    /// Exchange rate applied, frozen from the snapshot.
    pub exchange_rate: Decimal,
    /// Amount the recipient receives, in the destination currency.
    pub final_amount: Decimal,
    /// Destination currency.
    pub currency: Currency,
}

/// Computes the fee/conversion breakdown for a transfer.
///
/// Both roundings are ceilings, never round-to-nearest:
///
/// ```text
/// fee              = ceil(amount * fee_rate(currency))
/// amount_after_fee = amount - fee
/// final_amount     = ceil(amount_after_fee * rate)
/// ```
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use wiremit_core::rates::RateSnapshot;
/// use wiremit_core::transfer::quote;
/// use wiremit_shared::types::Currency;
///
/// let rates = RateSnapshot {
///     usd: dec!(1),
///     gbp: dec!(0.74),
///     zar: dec!(17.75),
///     usdt: dec!(1),
/// };
/// let q = quote(dec!(100), Currency::Gbp, &rates);
/// assert_eq!(q.fee, dec!(10));
/// assert_eq!(q.final_amount, dec!(67));
/// ```
#[must_use]
pub fn quote(amount: Decimal, currency: Currency, rates: &RateSnapshot) -> TransferQuote {
    let fee_rate = currency.fee_rate();
    let fee = (amount * fee_rate).ceil();
    let amount_after_fee = amount - fee;
    let exchange_rate = rates.rate_for(currency);
    let final_amount = (amount_after_fee * exchange_rate).ceil();

    TransferQuote {
        amount,
        fee,
        fee_percent: fee_rate * Decimal::ONE_HUNDRED,
        amount_after_fee,
        exchange_rate,
        final_amount,
        currency,
    }
}
