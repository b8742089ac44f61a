//! Chart renderer: redraws the selected pair's history.

use super::{ChartBackend, LineChart, EMPTY_TITLE};
use crate::domain::history::SharedHistory;
use crate::error::FxError;
use crate::shared::{CurrencyCode, PairKey};

pub struct ChartRenderer<C> {
    backend: C,
    history: SharedHistory,
}

impl<C: ChartBackend> ChartRenderer<C> {
    pub fn new(backend: C, history: SharedHistory) -> Self {
        Self { backend, history }
    }

    pub fn backend(&self) -> &C {
        &self.backend
    }

    /// Build the chart model for `pair_key` without drawing it.
    ///
    /// Points are in insertion order (oldest first). Returns `None` when the
    /// pair has no history.
    pub async fn chart_for(
        &self,
        pair_key: &PairKey,
        from: &CurrencyCode,
        to: &CurrencyCode,
    ) -> Option<LineChart> {
        let history = self.history.read().await;
        let records = history.get(pair_key);
        if records.is_empty() {
            return None;
        }

        let mut chart = LineChart::for_pair(from, to);
        for record in records {
            chart.labels.push(format!("{} {}", record.display_amount(), from));
            chart.values.push(record.converted);
        }
        Some(chart)
    }

    /// Replace whatever is drawn with the current history of `pair_key`.
    pub async fn render(
        &mut self,
        pair_key: &PairKey,
        from: &CurrencyCode,
        to: &CurrencyCode,
    ) -> Result<(), FxError> {
        let chart = self.chart_for(pair_key, from, to).await;

        self.backend.release()?;
        match chart {
            None => {
                tracing::debug!(pair = %pair_key, "Chart cleared: no history");
                self.backend.show_empty(EMPTY_TITLE)
            }
            Some(chart) => {
                tracing::debug!(pair = %pair_key, points = chart.len(), "Chart redrawn");
                self.backend.render_series(&chart)
            }
        }
    }
}
