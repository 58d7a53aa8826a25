//! Destination currencies and the platform fee policy.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! All amounts and rates are `rust_decimal::Decimal`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Destination currencies supported for outbound transfers.
///
/// Transfers are always funded in USD; the recipient receives one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// British Pound (United Kingdom corridor).
    Gbp,
    /// South African Rand (South Africa corridor).
    Zar,
}

impl Currency {
    /// Returns the platform fee rate for this corridor.
    ///
    /// Fixed policy constants, not configurable per call:
    /// 10% for GBP, 20% for ZAR.
    #[must_use]
    pub fn fee_rate(self) -> Decimal {
        match self {
            // Decimal::new(mantissa, scale): 0.10 and 0.20
            Self::Gbp => Decimal::new(10, 2),
            Self::Zar => Decimal::new(20, 2),
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Gbp => write!(f, "GBP"),
            Self::Zar => write!(f, "ZAR"),
        }
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "GBP" => Ok(Self::Gbp),
            "ZAR" => Ok(Self::Zar),
            _ => Err(format!("Unsupported currency: {s}")),
        }
    }
}
