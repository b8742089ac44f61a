//! Wire types for the exchange-rate REST API.

use crate::shared::CurrencyCode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Response of `GET /{key}/latest/{base}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatestRatesResponse {
    pub result: String,
    #[serde(rename = "error-type", default, skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
    #[serde(default)]
    pub base_code: Option<CurrencyCode>,
    #[serde(default)]
    pub time_last_update_unix: Option<i64>,
    #[serde(default)]
    pub conversion_rates: BTreeMap<CurrencyCode, f64>,
}

/// Response of `GET /{key}/pair/{from}/{to}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairRateResponse {
    pub result: String,
    #[serde(rename = "error-type", default, skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
    #[serde(default)]
    pub base_code: Option<CurrencyCode>,
    #[serde(default)]
    pub target_code: Option<CurrencyCode>,
    #[serde(default)]
    pub time_last_update_unix: Option<i64>,
    #[serde(default)]
    pub conversion_rate: Option<f64>,
}

/// The `result` value of a successful call.
pub const RESULT_SUCCESS: &str = "success";
