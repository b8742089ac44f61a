//! Headless chart backend. Keeps the current frame in memory.

use super::{ChartBackend, LineChart};
use crate::error::FxError;

/// What a `MemoryChart` is currently showing.
#[derive(Debug, Clone, PartialEq)]
pub enum Frame {
    /// Nothing drawn yet, or released.
    Blank,
    /// Empty-state title, no series.
    Empty(String),
    Series(LineChart),
}

#[derive(Debug, Clone)]
pub struct MemoryChart {
    frame: Frame,
    releases: usize,
    instances_created: usize,
}

impl Default for MemoryChart {
    fn default() -> Self {
        Self {
            frame: Frame::Blank,
            releases: 0,
            instances_created: 0,
        }
    }
}

impl MemoryChart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn series(&self) -> Option<&LineChart> {
        match &self.frame {
            Frame::Series(chart) => Some(chart),
            _ => None,
        }
    }

    /// Title currently displayed above the chart area.
    pub fn title(&self) -> Option<&str> {
        match &self.frame {
            Frame::Blank => None,
            Frame::Empty(title) => Some(title.as_str()),
            Frame::Series(chart) => Some(chart.title.as_str()),
        }
    }

    pub fn releases(&self) -> usize {
        self.releases
    }

    pub fn instances_created(&self) -> usize {
        self.instances_created
    }
}

impl ChartBackend for MemoryChart {
    fn release(&mut self) -> Result<(), FxError> {
        self.releases += 1;
        self.frame = Frame::Blank;
        Ok(())
    }

    fn render_series(&mut self, chart: &LineChart) -> Result<(), FxError> {
        if !matches!(self.frame, Frame::Blank) {
            return Err(FxError::Chart("previous chart instance not released".to_string()));
        }
        self.instances_created += 1;
        self.frame = Frame::Series(chart.clone());
        Ok(())
    }

    fn show_empty(&mut self, title: &str) -> Result<(), FxError> {
        self.frame = Frame::Empty(title.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_without_release_is_rejected() {
        let mut chart = MemoryChart::new();
        let model = LineChart::for_pair(&"USD".into(), &"INR".into());
        chart.render_series(&model).unwrap();
        assert!(chart.render_series(&model).is_err());
        chart.release().unwrap();
        assert!(chart.render_series(&model).is_ok());
        assert_eq!(chart.title(), Some("Conversion Chart (USD → INR)"));
    }
}
