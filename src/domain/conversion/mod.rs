//! Conversion domain: amount validation and display-ready results.

pub mod engine;

use crate::domain::history::ConversionRecord;
use crate::error::FxError;
use crate::shared::fmt::{display_amount, fixed};
use crate::shared::{CurrencyCode, PairKey};
use serde::Serialize;

pub use engine::ConversionEngine;

/// Parse user input into a positive, finite amount.
///
/// Input is trimmed and must be a complete number: `"12abc"` is rejected.
pub fn parse_amount(input: &str) -> Result<f64, FxError> {
    let trimmed = input.trim();
    let amount: f64 = trimmed
        .parse()
        .map_err(|_| FxError::Validation(format!("not a number: {:?}", trimmed)))?;
    if !amount.is_finite() || amount <= 0.0 {
        return Err(FxError::Validation(format!(
            "amount must be a positive number, got {}",
            trimmed
        )));
    }
    Ok(amount)
}

/// Outcome of one conversion, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionResult {
    pub from: CurrencyCode,
    pub to: CurrencyCode,
    pub pair_key: PairKey,
    pub amount: f64,
    pub rate: f64,
    /// Full-precision `amount * rate`.
    pub converted: f64,
    /// `converted` with two decimals.
    pub converted_display: String,
    /// `"1 USD = 83.1234 INR"`.
    pub rate_info: String,
    pub is_refresh: bool,
    pub record: ConversionRecord,
}

impl ConversionResult {
    pub(crate) fn new(
        from: CurrencyCode,
        to: CurrencyCode,
        record: ConversionRecord,
        is_refresh: bool,
    ) -> Self {
        Self {
            pair_key: PairKey::new(&from, &to),
            amount: record.amount,
            rate: record.rate,
            converted: record.converted,
            converted_display: record.display_converted(),
            rate_info: format!("1 {} = {} {}", from, fixed(record.rate, 4), to),
            from,
            to,
            is_refresh,
            record,
        }
    }

    /// Whether the result-reveal animation should play (skipped on refresh).
    pub fn animate(&self) -> bool {
        !self.is_refresh
    }

    /// History list line, e.g. `"Just now: 100 USD = 8312.34 INR"`.
    pub fn history_line(&self) -> String {
        format!(
            "{}: {} {} = {} {}",
            self.record.time,
            display_amount(self.amount),
            self.from,
            self.converted_display,
            self.to
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_parse_amount_accepts_positive_numbers() {
        assert_eq!(parse_amount("100").unwrap(), 100.0);
        assert_eq!(parse_amount(" 12.5 ").unwrap(), 12.5);
        assert_eq!(parse_amount("1e3").unwrap(), 1000.0);
    }

    #[test]
    fn test_parse_amount_rejects_invalid() {
        for input in ["", "   ", "abc", "12abc", "0", "-5", "0.0", "NaN", "inf", "-inf"] {
            let err = parse_amount(input).unwrap_err();
            assert!(err.is_validation(), "{:?} should be a validation error", input);
        }
    }

    #[test]
    fn test_result_display_fields() {
        let record = ConversionRecord::new(100.0, 83.1234, Utc::now());
        let result = ConversionResult::new("USD".into(), "INR".into(), record, false);
        assert_eq!(result.pair_key.as_str(), "USD_INR");
        assert_eq!(result.converted_display, "8312.34");
        assert_eq!(result.rate_info, "1 USD = 83.1234 INR");
        assert_eq!(result.history_line(), "Just now: 100 USD = 8312.34 INR");
        assert!(result.animate());
    }

    #[test]
    fn test_refresh_result_skips_animation() {
        let record = ConversionRecord::new(1.0, 0.9, Utc::now());
        let result = ConversionResult::new("USD".into(), "EUR".into(), record, true);
        assert!(!result.animate());
        assert_eq!(result.rate_info, "1 USD = 0.9000 EUR");
    }
}
