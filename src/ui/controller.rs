//! Controller: binds submit, refresh, swap, select and clear to the engine.

use super::{
    UiConfig, View, MSG_CONVERSION_OK, MSG_FETCH_FAILED, MSG_INVALID_AMOUNT, MSG_LOAD_FAILED,
    MSG_RATES_UPDATED, MSG_REFRESHING,
};
use crate::domain::chart::{ChartBackend, ChartRenderer};
use crate::domain::conversion::{ConversionEngine, ConversionResult};
use crate::domain::history::{HistoryStore, SharedHistory};
use crate::domain::rates::{CurrencyList, RateSource};
use crate::error::FxError;
use crate::shared::{CurrencyCode, Selection};

use async_lock::Mutex;
use std::time::Duration;

/// Application controller.
///
/// Methods take `&self` so event handlers can share one instance. Conversions
/// triggered while another is in flight are not queued or dropped: each one
/// records and redraws when its own rate lookup completes.
pub struct Controller<R, C, V> {
    engine: ConversionEngine<R>,
    renderer: Mutex<ChartRenderer<C>>,
    selection: Mutex<Selection>,
    view: V,
    config: UiConfig,
}

impl<R, C, V> Controller<R, C, V>
where
    R: RateSource,
    C: ChartBackend,
    V: View,
{
    pub fn new(rates: R, backend: C, view: V, config: UiConfig) -> Self {
        Self::with_history(rates, backend, view, HistoryStore::shared(), config)
    }

    /// Build around an existing history handle.
    pub fn with_history(
        rates: R,
        backend: C,
        view: V,
        history: SharedHistory,
        config: UiConfig,
    ) -> Self {
        let selection = Selection {
            from: config.default_from.clone(),
            to: config.default_to.clone(),
        };
        Self {
            engine: ConversionEngine::new(rates, history.clone()),
            renderer: Mutex::new(ChartRenderer::new(backend, history)),
            selection: Mutex::new(selection),
            view,
            config,
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn history(&self) -> &SharedHistory {
        self.engine.history()
    }

    pub fn engine(&self) -> &ConversionEngine<R> {
        &self.engine
    }

    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    pub async fn selection(&self) -> Selection {
        self.selection.lock().await.clone()
    }

    /// Run `f` against the chart backend.
    pub async fn with_backend<T>(&self, f: impl FnOnce(&C) -> T) -> T {
        let renderer = self.renderer.lock().await;
        f(renderer.backend())
    }

    // ── Actions ──────────────────────────────────────────────────────────

    /// Load the currency list, populate the selectors, pick the default pair
    /// and draw the chart.
    pub async fn start(&self) -> Result<CurrencyList, FxError> {
        let list = match self.engine.rates().list_currencies().await {
            Ok(list) => list,
            Err(e) => {
                tracing::error!("Failed to load currency list: {}", e);
                self.view.alert(MSG_LOAD_FAILED);
                return Err(e);
            }
        };

        self.view.set_currencies(&list.codes);

        let selection = {
            let mut selection = self.selection.lock().await;
            *selection = Selection {
                from: pick(&list.codes, &self.config.default_from, 0),
                to: pick(&list.codes, &self.config.default_to, 1),
            };
            selection.clone()
        };
        self.view.set_selection(&selection);
        self.redraw().await;

        Ok(list)
    }

    /// Convert `amount_text` for the current selection.
    pub async fn submit(&self, amount_text: &str) -> Result<ConversionResult, FxError> {
        self.run_conversion(amount_text, false).await
    }

    /// Re-run the conversion for fresh rates. Appends a new history record.
    pub async fn refresh(&self, amount_text: &str) -> Result<ConversionResult, FxError> {
        self.view.toast(MSG_REFRESHING);
        self.run_conversion(amount_text, true).await
    }

    /// Exchange `from` and `to`, then redraw for the swapped pair.
    pub async fn swap(&self) -> Selection {
        let selection = {
            let mut selection = self.selection.lock().await;
            selection.swap();
            selection.clone()
        };
        self.view.set_selection(&selection);
        self.redraw().await;
        selection
    }

    /// Selector change.
    pub async fn select(&self, from: CurrencyCode, to: CurrencyCode) -> Selection {
        let selection = {
            let mut selection = self.selection.lock().await;
            *selection = Selection { from, to };
            selection.clone()
        };
        self.redraw().await;
        selection
    }

    /// Wipe the history of every pair and redraw the (now empty) chart.
    pub async fn clear_history(&self) {
        self.history().write().await.clear();
        self.view.clear_history();
        self.redraw().await;
        tracing::info!("History cleared");
    }

    /// Redraw the chart for the current selection. Chart failures are logged,
    /// never surfaced to the user.
    ///
    /// The selection is read under the renderer lock, so a queued redraw draws
    /// the pair selected when it runs.
    pub async fn redraw(&self) {
        let mut renderer = self.renderer.lock().await;
        let selection = self.selection().await;
        if let Err(e) = renderer
            .render(&selection.pair_key(), &selection.from, &selection.to)
            .await
        {
            tracing::error!("Chart redraw failed: {}", e);
        }
    }

    // ── Internal ─────────────────────────────────────────────────────────

    async fn run_conversion(
        &self,
        amount_text: &str,
        is_refresh: bool,
    ) -> Result<ConversionResult, FxError> {
        let selection = self.selection().await;
        let result = match self
            .engine
            .convert(&selection.from, &selection.to, amount_text, is_refresh)
            .await
        {
            Ok(result) => result,
            Err(e) => {
                self.report(&e);
                return Err(e);
            }
        };

        if result.animate() {
            self.view.hide_result();
        }
        self.view.show_result(&result);
        self.view.toast(if is_refresh {
            MSG_RATES_UPDATED
        } else {
            MSG_CONVERSION_OK
        });
        self.view.prepend_history(&result.history_line());
        self.redraw().await;

        if result.animate() {
            futures_timer::Delay::new(Duration::from_millis(self.config.reveal_delay_ms)).await;
            self.view.reveal_result();
        }

        Ok(result)
    }

    fn report(&self, e: &FxError) {
        if e.is_validation() {
            tracing::debug!("Rejected input: {}", e);
            self.view.alert(MSG_INVALID_AMOUNT);
        } else {
            tracing::error!("Conversion failed: {}", e);
            self.view.alert(MSG_FETCH_FAILED);
        }
    }
}

/// `preferred` if listed, else the code at `fallback_index`, else the first code.
fn pick(codes: &[CurrencyCode], preferred: &CurrencyCode, fallback_index: usize) -> CurrencyCode {
    if codes.is_empty() || codes.contains(preferred) {
        return preferred.clone();
    }
    codes
        .get(fallback_index)
        .or_else(|| codes.first())
        .cloned()
        .unwrap_or_else(|| preferred.clone())
}
