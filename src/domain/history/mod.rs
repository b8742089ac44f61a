//! History domain: conversion records kept per currency pair.

pub mod state;

use crate::shared::fmt::{display_amount, fixed, relative_since};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use state::{HistoryStore, SharedHistory};

/// One completed conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRecord {
    /// Source-currency amount, always positive.
    pub amount: f64,
    /// Target-currency amount at full precision (`amount * rate`).
    pub converted: f64,
    /// Target units per source unit at conversion time.
    pub rate: f64,
    /// Relative label computed once, when the record was created.
    pub time: String,
    pub created_at: DateTime<Utc>,
}

impl ConversionRecord {
    pub fn new(amount: f64, rate: f64, created_at: DateTime<Utc>) -> Self {
        Self {
            amount,
            converted: amount * rate,
            rate,
            time: relative_since(created_at, Utc::now()),
            created_at,
        }
    }

    /// Converted amount with two decimals, e.g. `"8312.34"`.
    pub fn display_converted(&self) -> String {
        fixed(self.converted, 2)
    }

    pub fn display_amount(&self) -> String {
        display_amount(self.amount)
    }

    /// Fresh relative label as of `now` (the stored `time` never changes).
    pub fn age(&self, now: DateTime<Utc>) -> String {
        relative_since(self.created_at, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_record_keeps_full_precision() {
        let rec = ConversionRecord::new(100.0, 83.1234, Utc::now());
        assert!((rec.converted - 8312.34).abs() < 1e-9);
        assert_eq!(rec.converted, 100.0 * 83.1234);
        assert_eq!(rec.display_converted(), "8312.34");
        assert_eq!(rec.display_amount(), "100");
        assert_eq!(rec.time, "Just now");
    }

    #[test]
    fn test_time_label_is_frozen() {
        let created = Utc::now();
        let rec = ConversionRecord::new(1.0, 2.0, created);
        assert_eq!(rec.age(created + Duration::minutes(45)), "45 minutes ago");
        assert_eq!(rec.time, "Just now");
    }
}
