//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains some of:
//! - `mod.rs`: Rich domain types
//! - `wire.rs`: Raw serde structs matching API responses
//! - `convert.rs`: `TryFrom`/`From` conversions with validation
//! - `state.rs`: State containers with update methods
//! - `client.rs`: Sub-client with HTTP methods

pub mod chart;
pub mod conversion;
pub mod history;
pub mod rates;
