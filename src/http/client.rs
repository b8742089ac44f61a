//! Low-level HTTP client: `ExchangeRateHttp`.
//!
//! One method per API endpoint. Returns wire types (conversion to domain types
//! happens at the sub-client boundary). A single attempt per call: no retry,
//! no backoff, no request timeout.

use crate::domain::rates::wire::{LatestRatesResponse, PairRateResponse};
use crate::error::{FxError, HttpError};
use crate::shared::CurrencyCode;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing;

/// Low-level HTTP client for the exchange-rate REST API.
#[derive(Clone)]
pub struct ExchangeRateHttp {
    base_url: String,
    /// Path segment between the base URL and the endpoint. NEVER logged.
    api_key: String,
    client: Client,
}

impl ExchangeRateHttp {
    pub fn new(base_url: &str, api_key: &str) -> Result<Self, FxError> {
        let client = Client::builder().build().map_err(HttpError::from)?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Rates ────────────────────────────────────────────────────────────

    pub async fn get_latest(&self, base: &CurrencyCode) -> Result<LatestRatesResponse, HttpError> {
        let path = format!("/latest/{}", urlencoding::encode(base.as_str()));
        self.get(&path).await
    }

    pub async fn get_pair(
        &self,
        from: &CurrencyCode,
        to: &CurrencyCode,
    ) -> Result<PairRateResponse, HttpError> {
        let path = format!(
            "/pair/{}/{}",
            urlencoding::encode(from.as_str()),
            urlencoding::encode(to.as_str())
        );
        self.get(&path).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}{}",
            self.base_url,
            urlencoding::encode(&self.api_key),
            path
        )
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, HttpError> {
        tracing::debug!("GET {}/<key>{}", self.base_url, path);

        let resp = self.client.get(self.url_for(path)).send().await?;
        let status = resp.status();

        if status.is_success() {
            let parsed = resp.json::<T>().await?;
            return Ok(parsed);
        }

        let status_code = status.as_u16();
        let body_text = resp.text().await.unwrap_or_default();

        // The API reports bad keys and unknown codes as JSON bodies on 4xx
        // responses; hand those back so the caller sees the `error-type`.
        if let Ok(parsed) = serde_json::from_str::<T>(&body_text) {
            return Ok(parsed);
        }

        match status_code {
            404 => Err(HttpError::NotFound(path.to_string())),
            _ => Err(HttpError::Status {
                status: status_code,
                body: body_text,
            }),
        }
    }
}

impl std::fmt::Debug for ExchangeRateHttp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExchangeRateHttp")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}
