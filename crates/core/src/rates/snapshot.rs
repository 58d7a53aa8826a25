//! The FX rate snapshot type.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use wiremit_shared::types::Currency;

/// One complete set of USD-based exchange rates.
///
/// A snapshot is always replaced wholesale on a successful fetch; it is
/// never merged field-by-field across fetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateSnapshot {
    /// USD base rate, fixed at 1 unless the provider overrides it.
    #[serde(rename = "USD")]
    pub usd: Decimal,
    /// USD → GBP.
    #[serde(rename = "GBP")]
    pub gbp: Decimal,
    /// USD → ZAR.
    #[serde(rename = "ZAR")]
    pub zar: Decimal,
    /// USD → USDT, carried for display only.
    #[serde(rename = "USDT")]
    pub usdt: Decimal,
}

impl RateSnapshot {
    /// Returns the conversion rate for a destination currency.
    #[must_use]
    pub const fn rate_for(&self, currency: Currency) -> Decimal {
        match currency {
            Currency::Gbp => self.gbp,
            Currency::Zar => self.zar,
        }
    }
}

impl Default for RateSnapshot {
    fn default() -> Self {
        Self {
            usd: Decimal::ONE,
            gbp: Decimal::ZERO,
            zar: Decimal::ZERO,
            usdt: Decimal::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_has_usd_base() {
        let snap = RateSnapshot::default();
        assert_eq!(snap.usd, Decimal::ONE);
        assert_eq!(snap.gbp, Decimal::ZERO);
    }

    #[test]
    fn test_rate_for_corridor() {
        let snap = RateSnapshot {
            usd: Decimal::ONE,
            gbp: dec!(0.74),
            zar: dec!(17.75),
            usdt: Decimal::ONE,
        };
        assert_eq!(snap.rate_for(Currency::Gbp), dec!(0.74));
        assert_eq!(snap.rate_for(Currency::Zar), dec!(17.75));
    }

    #[test]
    fn test_serde_uses_provider_field_names() {
        let snap = RateSnapshot {
            usd: Decimal::ONE,
            gbp: dec!(0.74),
            zar: dec!(17.75),
            usdt: Decimal::ONE,
        };
        let json = serde_json::to_value(&snap).unwrap();
        assert_eq!(json["GBP"], serde_json::json!("0.74"));
        assert!(json.get("gbp").is_none());
    }
}
