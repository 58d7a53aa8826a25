//! Property-based tests for the transfer quote calculator.

use proptest::prelude::*;
use rust_decimal::Decimal;
use wiremit_shared::types::Currency;

use super::quote::quote;
use crate::rates::RateSnapshot;

/// Strategy over valid whole-cent amounts in [1.00, 10000.00] USD.
fn valid_amount() -> impl Strategy<Value = Decimal> {
    (100i64..=1_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy over both destination currencies.
fn any_currency() -> impl Strategy<Value = Currency> {
    prop_oneof![Just(Currency::Gbp), Just(Currency::Zar)]
}

/// Strategy over plausible positive rates (0.0001 to 100.0000).
fn positive_rate() -> impl Strategy<Value = Decimal> {
    (1i64..=1_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

fn snapshot_with(rate: Decimal) -> RateSnapshot {
    RateSnapshot {
        usd: Decimal::ONE,
        gbp: rate,
        zar: rate,
        usdt: Decimal::ONE,
    }
}

/// True when `value` is an integer (no fractional part).
fn is_whole(value: Decimal) -> bool {
    value == value.trunc()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The fee is exactly ceil(amount * fee_rate) and always a whole number.
    #[test]
    fn prop_fee_is_ceiling_of_rate_share(
        amount in valid_amount(),
        currency in any_currency(),
        rate in positive_rate(),
    ) {
        let q = quote(amount, currency, &snapshot_with(rate));
        prop_assert_eq!(q.fee, (amount * currency.fee_rate()).ceil());
        prop_assert!(is_whole(q.fee));
        // Ceiling never rounds down
        prop_assert!(q.fee >= amount * currency.fee_rate());
    }

    /// The final amount is exactly ceil((amount - fee) * rate), whole.
    #[test]
    fn prop_final_amount_is_ceiling_of_conversion(
        amount in valid_amount(),
        currency in any_currency(),
        rate in positive_rate(),
    ) {
        let q = quote(amount, currency, &snapshot_with(rate));
        prop_assert_eq!(q.amount_after_fee, amount - q.fee);
        prop_assert_eq!(q.final_amount, (q.amount_after_fee * rate).ceil());
        prop_assert!(is_whole(q.final_amount));
        prop_assert!(q.final_amount >= q.amount_after_fee * rate);
    }

    /// Quoting is deterministic.
    #[test]
    fn prop_quote_is_deterministic(
        amount in valid_amount(),
        currency in any_currency(),
        rate in positive_rate(),
    ) {
        let rates = snapshot_with(rate);
        prop_assert_eq!(quote(amount, currency, &rates), quote(amount, currency, &rates));
    }

    /// Ceiling overshoots by strictly less than one unit at each step.
    #[test]
    fn prop_ceiling_error_bounded(
        amount in valid_amount(),
        currency in any_currency(),
        rate in positive_rate(),
    ) {
        let q = quote(amount, currency, &snapshot_with(rate));
        prop_assert!(q.fee - amount * currency.fee_rate() < Decimal::ONE);
        prop_assert!(q.final_amount - q.amount_after_fee * rate < Decimal::ONE);
    }
}
