//! High-level client: `FxClient` with nested sub-client accessors.
//!
//! Each domain with remote calls has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and the accessor methods.

use crate::domain::rates::client::Rates;
use crate::domain::rates::{CurrencyList, PairRate, RateSource};
use crate::error::FxError;
use crate::http::ExchangeRateHttp;
use crate::shared::CurrencyCode;

// Re-export sub-client types for convenience.
pub use crate::domain::rates::client::Rates as RatesClient;

/// The primary entry point for talking to the exchange-rate API.
#[derive(Debug, Clone)]
pub struct FxClient {
    pub(crate) http: ExchangeRateHttp,
    pub(crate) base_currency: CurrencyCode,
}

impl FxClient {
    pub fn builder() -> FxClientBuilder {
        FxClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn rates(&self) -> Rates<'_> {
        Rates { client: self }
    }

    pub fn base_currency(&self) -> &CurrencyCode {
        &self.base_currency
    }
}

impl RateSource for FxClient {
    async fn list_currencies(&self) -> Result<CurrencyList, FxError> {
        self.rates().currencies().await
    }

    async fn pair_rate(&self, from: &CurrencyCode, to: &CurrencyCode) -> Result<PairRate, FxError> {
        self.rates().pair(from, to).await
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct FxClientBuilder {
    base_url: String,
    api_key: String,
    base_currency: CurrencyCode,
}

impl Default for FxClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            api_key: String::new(),
            base_currency: CurrencyCode::new(crate::network::DEFAULT_BASE_CURRENCY),
        }
    }
}

impl FxClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn api_key(mut self, key: &str) -> Self {
        self.api_key = key.trim().to_string();
        self
    }

    /// Base currency for the listing call (default `USD`).
    pub fn base_currency(mut self, code: &str) -> Self {
        self.base_currency = CurrencyCode::new(code);
        self
    }

    pub fn build(self) -> Result<FxClient, FxError> {
        if self.api_key.is_empty() {
            return Err(FxError::Validation("API key is required".to_string()));
        }
        if self.base_currency.is_empty() {
            return Err(FxError::Validation("base currency is required".to_string()));
        }
        Ok(FxClient {
            http: ExchangeRateHttp::new(&self.base_url, &self.api_key)?,
            base_currency: self.base_currency,
        })
    }
}
