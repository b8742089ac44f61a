//! In-memory `RateSource` for unit tests.

use super::{CurrencyList, PairRate, RateSource};
use crate::error::FxError;
use crate::shared::CurrencyCode;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

/// A `RateSource` backed by an in-memory table of directional rates.
///
/// Rates can be changed between calls with `set_rate`, and the source can be
/// switched into a failing mode that mimics an unreachable API.
/// `pair_calls` counts lookups so tests can assert none were made.
#[derive(Debug, Default)]
pub struct FixedRates {
    rates: Mutex<BTreeMap<(CurrencyCode, CurrencyCode), f64>>,
    failing: AtomicBool,
    pair_calls: AtomicUsize,
}

impl FixedRates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style `set_rate`.
    pub fn with_rate(self, from: &str, to: &str, rate: f64) -> Self {
        self.set_rate(from, to, rate);
        self
    }

    pub fn set_rate(&self, from: &str, to: &str, rate: f64) {
        if let Ok(mut rates) = self.rates.lock() {
            rates.insert((CurrencyCode::new(from), CurrencyCode::new(to)), rate);
        }
    }

    /// When set, every call fails as if the network were down.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of `pair_rate` calls made so far, successful or not.
    pub fn pair_calls(&self) -> usize {
        self.pair_calls.load(Ordering::SeqCst)
    }

    fn check_available(&self) -> Result<(), FxError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(FxError::Other("rate source unavailable".to_string()));
        }
        Ok(())
    }
}

impl RateSource for FixedRates {
    async fn list_currencies(&self) -> Result<CurrencyList, FxError> {
        self.check_available()?;
        let rates = self
            .rates
            .lock()
            .map_err(|e| FxError::Other(e.to_string()))?;

        let mut codes: Vec<CurrencyCode> = rates
            .keys()
            .flat_map(|(from, to)| [from.clone(), to.clone()])
            .collect();
        codes.sort();
        codes.dedup();

        Ok(CurrencyList {
            base: None,
            codes,
            updated_at: None,
        })
    }

    async fn pair_rate(&self, from: &CurrencyCode, to: &CurrencyCode) -> Result<PairRate, FxError> {
        self.pair_calls.fetch_add(1, Ordering::SeqCst);
        self.check_available()?;
        let rates = self
            .rates
            .lock()
            .map_err(|e| FxError::Other(e.to_string()))?;

        let rate = if from == to {
            Some(1.0)
        } else {
            rates.get(&(from.clone(), to.clone())).copied()
        };

        match rate {
            Some(rate) => Ok(PairRate {
                from: from.clone(),
                to: to.clone(),
                rate,
                updated_at: None,
            }),
            None => Err(FxError::Api {
                result: "error".to_string(),
                error_type: Some("unsupported-code".to_string()),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_lists_every_code_once() {
        let rates = FixedRates::new()
            .with_rate("USD", "INR", 83.0)
            .with_rate("INR", "USD", 0.012)
            .with_rate("EUR", "USD", 1.08);
        let list = rates.list_currencies().await.unwrap();
        let codes: Vec<_> = list.codes.iter().map(|c| c.as_str()).collect();
        assert_eq!(codes, ["EUR", "INR", "USD"]);
    }

    #[tokio::test]
    async fn test_pair_rate_lookup_and_counting() {
        let rates = FixedRates::new().with_rate("usd", "inr", 83.1234);
        let pr = rates
            .pair_rate(&CurrencyCode::from("USD"), &CurrencyCode::from("INR"))
            .await
            .unwrap();
        assert_eq!(pr.rate, 83.1234);

        let missing = rates
            .pair_rate(&CurrencyCode::from("INR"), &CurrencyCode::from("USD"))
            .await;
        assert_eq!(missing.unwrap_err().api_error_type(), Some("unsupported-code"));
        assert_eq!(rates.pair_calls(), 2);
    }

    #[test]
    fn test_same_currency_is_unit_rate() {
        let rates = FixedRates::new();
        let usd = CurrencyCode::from("USD");
        let pr = tokio_test::block_on(rates.pair_rate(&usd, &usd)).unwrap();
        assert_eq!(pr.rate, 1.0);
    }

    #[tokio::test]
    async fn test_failing_mode() {
        let rates = FixedRates::new().with_rate("USD", "INR", 83.0);
        rates.set_failing(true);
        assert!(rates.list_currencies().await.is_err());
        assert!(rates
            .pair_rate(&CurrencyCode::from("USD"), &CurrencyCode::from("INR"))
            .await
            .is_err());
    }
}
