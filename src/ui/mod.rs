//! UI layer: user actions wired to the engine, renderer and a `View`.
//!
//! `Controller` is platform-agnostic. `wasm` binds it to the page DOM and
//! Chart.js.

pub mod controller;

#[cfg(feature = "wasm")]
pub mod wasm;

use crate::domain::conversion::ConversionResult;
use crate::shared::{CurrencyCode, Selection};
use serde::{Deserialize, Serialize};

pub use controller::Controller;

pub const MSG_CONVERSION_OK: &str = "✅ Conversion Successful!";
pub const MSG_REFRESHING: &str = "🔄 Refreshing latest rates...";
pub const MSG_RATES_UPDATED: &str = "✅ Rates Updated!";
pub const MSG_INVALID_AMOUNT: &str = "Please enter a valid amount!";
pub const MSG_FETCH_FAILED: &str = "⚠️ Error fetching conversion data!";
pub const MSG_LOAD_FAILED: &str =
    "⚠️ Could not load currency list. Check your API key or connection.";

/// UI timing and startup selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// How long a toast stays visible.
    pub toast_ms: u32,
    /// Pause between hiding and revealing a fresh result, so the transition
    /// shows even when the result is identical to the previous one.
    pub reveal_delay_ms: u64,
    pub default_from: CurrencyCode,
    pub default_to: CurrencyCode,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            toast_ms: 2_000,
            reveal_delay_ms: 50,
            default_from: CurrencyCode::new(crate::network::DEFAULT_FROM),
            default_to: CurrencyCode::new(crate::network::DEFAULT_TO),
        }
    }
}

/// Presentation surface driven by the controller.
///
/// All methods are fire-and-forget; a view that cannot draw something logs it.
pub trait View {
    /// Populate both currency selectors.
    fn set_currencies(&self, codes: &[CurrencyCode]);

    fn set_selection(&self, selection: &Selection);

    /// Drop the "shown" state so the next reveal animates.
    fn hide_result(&self);

    fn show_result(&self, result: &ConversionResult);

    /// Apply the "shown" state.
    fn reveal_result(&self);

    /// Add a line at the top of the history list.
    fn prepend_history(&self, line: &str);

    fn clear_history(&self);

    /// Transient notification; replaces any toast still on screen.
    fn toast(&self, message: &str);

    /// Blocking error message.
    fn alert(&self, message: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ui_config_defaults() {
        let config = UiConfig::default();
        assert_eq!(config.toast_ms, 2_000);
        assert_eq!(config.reveal_delay_ms, 50);
        assert_eq!(config.default_from.as_str(), "USD");
        assert_eq!(config.default_to.as_str(), "INR");
    }

    #[test]
    fn test_ui_config_partial_deserialize() {
        let config: UiConfig =
            serde_json::from_str(r#"{"toast_ms": 500, "default_to": "eur"}"#).unwrap();
        assert_eq!(config.toast_ms, 500);
        assert_eq!(config.reveal_delay_ms, 50);
        assert_eq!(config.default_to.as_str(), "EUR");
    }
}
