//! Rates sub-client: currency listing and pair rate queries.

use crate::client::FxClient;
use crate::domain::rates::{CurrencyList, PairRate};
use crate::error::FxError;
use crate::shared::CurrencyCode;

/// Sub-client for rate lookups.
pub struct Rates<'a> {
    pub(crate) client: &'a FxClient,
}

impl<'a> Rates<'a> {
    /// All currencies quoted against the configured base currency.
    pub async fn currencies(&self) -> Result<CurrencyList, FxError> {
        let resp = self
            .client
            .http
            .get_latest(&self.client.base_currency)
            .await?;
        let list = CurrencyList::try_from(resp)?;
        tracing::info!(count = list.codes.len(), "Loaded currency list");
        Ok(list)
    }

    /// Rate for one directional pair.
    pub async fn pair(&self, from: &CurrencyCode, to: &CurrencyCode) -> Result<PairRate, FxError> {
        let resp = self.client.http.get_pair(from, to).await?;
        resp.into_pair_rate(from, to)
    }
}
