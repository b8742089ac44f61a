//! Conversions from wire types to domain types for rates.
//!
//! Any `result` other than `"success"` is an API error, whatever else the body holds.

use super::wire::{LatestRatesResponse, PairRateResponse, RESULT_SUCCESS};
use super::{CurrencyList, PairRate};
use crate::error::FxError;
use crate::shared::CurrencyCode;
use chrono::{DateTime, Utc};

fn check_result(result: &str, error_type: Option<&str>) -> Result<(), FxError> {
    if result == RESULT_SUCCESS {
        return Ok(());
    }
    tracing::warn!(result, error_type, "Exchange-rate API returned non-success");
    Err(FxError::Api {
        result: result.to_string(),
        error_type: error_type.map(str::to_string),
    })
}

fn updated_at(unix: Option<i64>) -> Option<DateTime<Utc>> {
    unix.and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
}

impl TryFrom<LatestRatesResponse> for CurrencyList {
    type Error = FxError;

    fn try_from(r: LatestRatesResponse) -> Result<Self, Self::Error> {
        check_result(&r.result, r.error_type.as_deref())?;
        Ok(Self {
            base: r.base_code,
            updated_at: updated_at(r.time_last_update_unix),
            codes: r.conversion_rates.into_keys().collect(),
        })
    }
}

impl PairRateResponse {
    /// Validate and convert. `from` / `to` are used when the body omits its codes.
    pub fn into_pair_rate(self, from: &CurrencyCode, to: &CurrencyCode) -> Result<PairRate, FxError> {
        check_result(&self.result, self.error_type.as_deref())?;

        let rate = match self.conversion_rate {
            Some(r) if r.is_finite() && r > 0.0 => r,
            other => {
                return Err(FxError::Api {
                    result: self.result,
                    error_type: Some(format!("invalid conversion_rate: {:?}", other)),
                })
            }
        };

        Ok(PairRate {
            from: self.base_code.unwrap_or_else(|| from.clone()),
            to: self.target_code.unwrap_or_else(|| to.clone()),
            rate,
            updated_at: updated_at(self.time_last_update_unix),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair_response(result: &str, rate: Option<f64>) -> PairRateResponse {
        PairRateResponse {
            result: result.to_string(),
            error_type: None,
            base_code: Some(CurrencyCode::from("USD")),
            target_code: Some(CurrencyCode::from("INR")),
            time_last_update_unix: Some(1_700_000_000),
            conversion_rate: rate,
        }
    }

    #[test]
    fn test_currency_list_conversion() {
        let json = r#"{"result":"success","base_code":"USD","conversion_rates":{"USD":1,"INR":83.1,"AED":3.67}}"#;
        let resp: LatestRatesResponse = serde_json::from_str(json).unwrap();
        let list = CurrencyList::try_from(resp).unwrap();
        let codes: Vec<_> = list.codes.iter().map(|c| c.as_str()).collect();
        assert_eq!(codes, ["AED", "INR", "USD"]);
        assert_eq!(list.base.unwrap().as_str(), "USD");
    }

    #[test]
    fn test_currency_list_rejects_non_success() {
        let json = r#"{"result":"error","error-type":"invalid-key"}"#;
        let resp: LatestRatesResponse = serde_json::from_str(json).unwrap();
        let err = CurrencyList::try_from(resp).unwrap_err();
        assert_eq!(err.api_error_type(), Some("invalid-key"));
    }

    #[test]
    fn test_pair_rate_conversion() {
        let usd = CurrencyCode::from("USD");
        let inr = CurrencyCode::from("INR");
        let pr = pair_response("success", Some(83.1234))
            .into_pair_rate(&usd, &inr)
            .unwrap();
        assert_eq!(pr.rate, 83.1234);
        assert_eq!(pr.from, usd);
        assert_eq!(pr.to, inr);
        assert_eq!(pr.updated_at.unwrap().timestamp(), 1_700_000_000);
    }

    #[test]
    fn test_pair_rate_rejects_non_success() {
        let usd = CurrencyCode::from("USD");
        let inr = CurrencyCode::from("INR");
        let err = pair_response("error", Some(83.0))
            .into_pair_rate(&usd, &inr)
            .unwrap_err();
        assert!(matches!(err, FxError::Api { .. }));
    }

    #[test]
    fn test_pair_rate_rejects_missing_or_non_positive_rate() {
        let usd = CurrencyCode::from("USD");
        let inr = CurrencyCode::from("INR");
        for rate in [None, Some(0.0), Some(-1.5), Some(f64::NAN)] {
            let result = pair_response("success", rate).into_pair_rate(&usd, &inr);
            assert!(result.is_err(), "rate {:?} should be rejected", rate);
        }
    }
}
