//! HTTP client layer: `ExchangeRateHttp`, one method per API endpoint.

pub mod client;

pub use client::ExchangeRateHttp;
