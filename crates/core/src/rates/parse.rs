//! Parsing of the rate provider's response body.

use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;

use super::error::RateError;
use super::snapshot::RateSnapshot;

/// Parses a provider response into a complete rate snapshot.
///
/// The provider returns an array of loosely-shaped records; fields are
/// optional per record. Scanning keeps the last non-zero numeric value seen
/// for each of USD/GBP/ZAR/USDT. Absent or non-numeric fields are ignored,
/// not defaulted to zero.
///
/// # Errors
///
/// - `RateError::InvalidResponseShape` if the body is not a non-empty array.
/// - `RateError::MissingRate` if GBP or ZAR is still zero after the scan.
pub fn parse_provider_response(body: &Value) -> Result<RateSnapshot, RateError> {
    let Some(records) = body.as_array() else {
        return Err(RateError::InvalidResponseShape);
    };
    if records.is_empty() {
        return Err(RateError::InvalidResponseShape);
    }

    let mut snapshot = RateSnapshot::default();

    for record in records {
        let Some(fields) = record.as_object() else {
            continue;
        };
        if let Some(rate) = non_zero_rate(fields.get("USD")) {
            snapshot.usd = rate;
        }
        if let Some(rate) = non_zero_rate(fields.get("GBP")) {
            snapshot.gbp = rate;
        }
        if let Some(rate) = non_zero_rate(fields.get("ZAR")) {
            snapshot.zar = rate;
        }
        if let Some(rate) = non_zero_rate(fields.get("USDT")) {
            snapshot.usdt = rate;
        }
    }

    if snapshot.gbp.is_zero() {
        return Err(RateError::MissingRate("GBP"));
    }
    if snapshot.zar.is_zero() {
        return Err(RateError::MissingRate("ZAR"));
    }

    Ok(snapshot)
}

/// Extracts a non-zero numeric rate from an optional JSON field.
///
/// Goes through the number's decimal representation instead of `f64` to keep
/// the money path float-free.
fn non_zero_rate(field: Option<&Value>) -> Option<Decimal> {
    let number = field?.as_number()?;
    let rate = Decimal::from_str(&number.to_string())
        .or_else(|_| Decimal::from_scientific(&number.to_string()))
        .ok()?;
    if rate.is_zero() { None } else { Some(rate) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_parses_complete_single_record() {
        let body = json!([{ "USD": 1, "GBP": 0.74, "ZAR": 17.75, "USDT": 1.0 }]);
        let snap = parse_provider_response(&body).unwrap();
        assert_eq!(snap.usd, dec!(1));
        assert_eq!(snap.gbp, dec!(0.74));
        assert_eq!(snap.zar, dec!(17.75));
        assert_eq!(snap.usdt, dec!(1.0));
    }

    #[test]
    fn test_rates_spread_over_records() {
        let body = json!([{ "GBP": 0.74 }, { "ZAR": 17.75 }, { "USDT": 0.99 }]);
        let snap = parse_provider_response(&body).unwrap();
        assert_eq!(snap.gbp, dec!(0.74));
        assert_eq!(snap.zar, dec!(17.75));
        assert_eq!(snap.usdt, dec!(0.99));
        // USD never provided, keeps its base value
        assert_eq!(snap.usd, dec!(1));
    }

    #[test]
    fn test_last_non_zero_value_wins() {
        let body = json!([
            { "GBP": 0.70, "ZAR": 17.00 },
            { "GBP": 0.74 },
            { "GBP": 0, "ZAR": 17.75 }
        ]);
        let snap = parse_provider_response(&body).unwrap();
        // Trailing zero is ignored, not taken as an override
        assert_eq!(snap.gbp, dec!(0.74));
        assert_eq!(snap.zar, dec!(17.75));
    }

    #[test]
    fn test_non_numeric_fields_ignored() {
        let body = json!([
            { "GBP": "0.9", "ZAR": null },
            { "GBP": 0.74, "ZAR": 17.75 }
        ]);
        let snap = parse_provider_response(&body).unwrap();
        assert_eq!(snap.gbp, dec!(0.74));
        assert_eq!(snap.zar, dec!(17.75));
    }

    #[test]
    fn test_non_object_records_skipped() {
        let body = json!([42, "noise", { "GBP": 0.74, "ZAR": 17.75 }]);
        let snap = parse_provider_response(&body).unwrap();
        assert_eq!(snap.gbp, dec!(0.74));
    }

    #[test]
    fn test_missing_zar_fails() {
        let body = json!([{ "GBP": 0.75 }]);
        assert_eq!(
            parse_provider_response(&body),
            Err(RateError::MissingRate("ZAR"))
        );
    }

    #[test]
    fn test_missing_gbp_fails() {
        let body = json!([{ "ZAR": 17.75 }]);
        assert_eq!(
            parse_provider_response(&body),
            Err(RateError::MissingRate("GBP"))
        );
    }

    #[test]
    fn test_empty_array_is_invalid_shape() {
        assert_eq!(
            parse_provider_response(&json!([])),
            Err(RateError::InvalidResponseShape)
        );
    }

    #[test]
    fn test_non_array_is_invalid_shape() {
        assert_eq!(
            parse_provider_response(&json!({ "GBP": 0.74 })),
            Err(RateError::InvalidResponseShape)
        );
        assert_eq!(
            parse_provider_response(&json!(null)),
            Err(RateError::InvalidResponseShape)
        );
    }
}
