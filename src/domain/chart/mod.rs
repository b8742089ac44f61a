//! Chart domain: line-chart model of a pair's history and the backend seam.
//!
//! The renderer builds a `LineChart` from the history store and hands it to a
//! `ChartBackend`. Backends draw; they never read the store themselves.

pub mod memory;
pub mod renderer;

use crate::error::FxError;
use crate::shared::fmt::fixed;
use crate::shared::CurrencyCode;
use serde::Serialize;

pub use memory::MemoryChart;
pub use renderer::ChartRenderer;

/// Title shown when the selected pair has no history.
pub const EMPTY_TITLE: &str = "No conversions yet for this pair";

/// A single-series line chart: x = amount labels, y = converted values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineChart {
    pub title: String,
    pub series_label: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub x_axis_title: String,
    pub y_axis_title: String,
    /// Appended to every tooltip value (the target currency code).
    pub value_suffix: String,
}

impl LineChart {
    pub fn for_pair(from: &CurrencyCode, to: &CurrencyCode) -> Self {
        Self {
            title: format!("Conversion Chart ({} → {})", from, to),
            series_label: format!("{} to {}", from, to),
            labels: Vec::new(),
            values: Vec::new(),
            x_axis_title: format!("Amount in {}", from),
            y_axis_title: format!("Converted in {}", to),
            value_suffix: to.to_string(),
        }
    }

    pub fn tooltip_for(&self, value: f64) -> String {
        format!("{} {}", fixed(value, 2), self.value_suffix)
    }

    /// Tooltip text for point `index`, e.g. `"8312.34 INR"`.
    pub fn tooltip(&self, index: usize) -> Option<String> {
        self.values.get(index).map(|v| self.tooltip_for(*v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A charting backend.
///
/// One chart instance per redraw: the renderer calls `release` before every
/// `render_series` or `show_empty`, and a backend must drop its previous
/// instance there rather than update it in place.
pub trait ChartBackend {
    /// Destroy the current chart instance, if any.
    fn release(&mut self) -> Result<(), FxError>;

    /// Draw a new chart.
    fn render_series(&mut self, chart: &LineChart) -> Result<(), FxError>;

    /// Blank the drawing surface and show `title` instead of a chart.
    fn show_empty(&mut self, title: &str) -> Result<(), FxError>;
}

impl<T: ChartBackend + ?Sized> ChartBackend for Box<T> {
    fn release(&mut self) -> Result<(), FxError> {
        (**self).release()
    }

    fn render_series(&mut self, chart: &LineChart) -> Result<(), FxError> {
        (**self).render_series(chart)
    }

    fn show_empty(&mut self, title: &str) -> Result<(), FxError> {
        (**self).show_empty(title)
    }
}
