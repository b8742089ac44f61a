//! Rates domain: currency listing, pair rate lookup, and the `RateSource` seam.

#[cfg(feature = "http")]
pub mod client;
mod convert;
#[cfg(test)]
pub(crate) mod fixed;
pub mod wire;

use crate::error::FxError;
use crate::shared::CurrencyCode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(test)]
pub(crate) use fixed::FixedRates;

/// Currencies known to the API, sorted by code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyList {
    pub base: Option<CurrencyCode>,
    pub codes: Vec<CurrencyCode>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Exchange rate for one directional pair: `rate` units of `to` per unit of `from`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairRate {
    pub from: CurrencyCode,
    pub to: CurrencyCode,
    pub rate: f64,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Anything that can list currencies and quote a pair rate.
///
/// Implemented by `FxClient` against the live API.
/// One attempt per call; implementations do not retry.
#[allow(async_fn_in_trait)]
pub trait RateSource {
    async fn list_currencies(&self) -> Result<CurrencyList, FxError>;

    async fn pair_rate(&self, from: &CurrencyCode, to: &CurrencyCode) -> Result<PairRate, FxError>;
}

impl<T: RateSource + ?Sized> RateSource for &T {
    async fn list_currencies(&self) -> Result<CurrencyList, FxError> {
        (**self).list_currencies().await
    }

    async fn pair_rate(&self, from: &CurrencyCode, to: &CurrencyCode) -> Result<PairRate, FxError> {
        (**self).pair_rate(from, to).await
    }
}
