//! Conversion engine: validate, quote, record.

use super::{parse_amount, ConversionResult};
use crate::domain::history::{ConversionRecord, SharedHistory};
use crate::domain::rates::RateSource;
use crate::error::FxError;
use crate::shared::{CurrencyCode, PairKey};
use chrono::Utc;

/// Runs conversions against a `RateSource` and records them in a shared history.
///
/// Conversions are not serialized: two in flight at once both append, in the
/// order their rate lookups complete.
pub struct ConversionEngine<R> {
    rates: R,
    history: SharedHistory,
}

impl<R: RateSource> ConversionEngine<R> {
    pub fn new(rates: R, history: SharedHistory) -> Self {
        Self { rates, history }
    }

    pub fn rates(&self) -> &R {
        &self.rates
    }

    pub fn history(&self) -> &SharedHistory {
        &self.history
    }

    /// Convert `amount_text` units of `from` into `to`.
    ///
    /// Amount validation happens before any network call; a product that
    /// overflows `f64` is rejected once the rate is known. On any failure the history
    /// is left untouched. A refresh is a normal conversion that still appends
    /// a record; only its result is flagged so the view can skip the reveal
    /// animation.
    pub async fn convert(
        &self,
        from: &CurrencyCode,
        to: &CurrencyCode,
        amount_text: &str,
        is_refresh: bool,
    ) -> Result<ConversionResult, FxError> {
        let amount = parse_amount(amount_text)?;
        let quote = self.rates.pair_rate(from, to).await?;
        if !(amount * quote.rate).is_finite() {
            return Err(FxError::Validation(format!(
                "{} {} at rate {} is out of range",
                amount, quote.from, quote.rate
            )));
        }

        let record = ConversionRecord::new(amount, quote.rate, Utc::now());
        let pair_key = PairKey::new(&quote.from, &quote.to);

        self.history
            .write()
            .await
            .append(pair_key.clone(), record.clone());

        tracing::info!(
            pair = %pair_key,
            amount,
            rate = quote.rate,
            is_refresh,
            "Conversion recorded"
        );

        Ok(ConversionResult::new(quote.from, quote.to, record, is_refresh))
    }
}
