//! # Currency Converter
//!
//! Exchange-rate lookups, per-pair conversion history and history charts for
//! both native and WASM targets.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core**: Newtypes, formatting, domain models: rates, history, conversion
//!    engine, chart model (always available, WASM-safe)
//! 2. **HTTP API**: `ExchangeRateHttp`, one method per endpoint, single attempt
//! 3. **High-Level Client**: `FxClient` with the `rates()` sub-client
//! 4. **UI**: `Controller` over a `View` + `ChartBackend`; DOM + Chart.js
//!    bindings behind the `wasm` feature
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use currency_converter::prelude::*;
//!
//! let client = FxClient::builder().api_key("your-key").build()?;
//! let engine = ConversionEngine::new(client, HistoryStore::shared());
//!
//! let result = engine.convert(&"USD".into(), &"INR".into(), "100", false).await?;
//! println!("{} ({})", result.converted_display, result.rate_info);
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes and display formatting.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

/// Unified error types.
pub mod error;

/// Network URL and currency defaults.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// HTTP client for the exchange-rate API.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `FxClient`: the primary entry point for live rates.
#[cfg(feature = "http")]
pub mod client;

// ── Layer 4: UI ──────────────────────────────────────────────────────────────

/// Controller, view seam, and (with `wasm`) browser bindings.
#[cfg(feature = "http")]
pub mod ui;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{CurrencyCode, PairKey, Selection};

    // Domain types: rates
    pub use crate::domain::rates::{CurrencyList, PairRate, RateSource};

    // Domain types: history, conversion, chart
    pub use crate::domain::chart::{ChartBackend, ChartRenderer, LineChart, MemoryChart};
    pub use crate::domain::conversion::{parse_amount, ConversionEngine, ConversionResult};
    pub use crate::domain::history::{ConversionRecord, HistoryStore, SharedHistory};

    // Errors
    pub use crate::error::{FxError, HttpError};

    // Network
    pub use crate::network::{DEFAULT_API_URL, DEFAULT_BASE_CURRENCY};

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{FxClient, FxClientBuilder, RatesClient};

    // UI
    #[cfg(feature = "http")]
    pub use crate::ui::{Controller, UiConfig, View};
}
