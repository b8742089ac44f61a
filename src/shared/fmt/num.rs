//! Number formatting utilities for human-readable display.
//!
//! Rates and amounts travel as `f64`. Rounding goes through `rust_decimal` so
//! midpoints round away from zero on the value actually stored, not on the
//! binary approximation's next digit.

use rust_decimal::prelude::*;

/// Format an f64 with exactly `dp` decimal places, e.g. `fixed(8312.339999, 2) == "8312.34"`.
pub fn fixed(value: f64, dp: u32) -> String {
    match Decimal::from_f64_retain(value) {
        Some(d) => {
            let rounded = d.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
            format!("{:.1$}", rounded, dp as usize)
        }
        None => format!("{:.1$}", value, dp as usize),
    }
}

/// Shortest round-trip display of an amount as the user typed it (`100`, `12.5`).
pub fn display_amount(value: f64) -> String {
    format!("{}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_two_decimals() {
        assert_eq!(fixed(100.0 * 83.1234, 2), "8312.34");
        assert_eq!(fixed(8312.339999999, 2), "8312.34");
        assert_eq!(fixed(100.0, 2), "100.00");
        assert_eq!(fixed(0.5, 2), "0.50");
    }

    #[test]
    fn test_fixed_four_decimals() {
        assert_eq!(fixed(83.1234, 4), "83.1234");
        assert_eq!(fixed(0.012, 4), "0.0120");
    }

    #[test]
    fn test_fixed_midpoint_rounds_away_from_zero() {
        assert_eq!(fixed(2.5, 0), "3");
        assert_eq!(fixed(-2.5, 0), "-3");
        assert_eq!(fixed(0.125, 2), "0.13");
    }

    #[test]
    fn test_fixed_non_finite_passthrough() {
        assert_eq!(fixed(f64::INFINITY, 2), "inf");
        assert_eq!(fixed(f64::NAN, 2), "NaN");
    }

    #[test]
    fn test_display_amount_shortest() {
        assert_eq!(display_amount(100.0), "100");
        assert_eq!(display_amount(12.5), "12.5");
        assert_eq!(display_amount(0.001), "0.001");
    }
}
