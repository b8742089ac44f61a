//! Display formatting: fixed-decimal numbers and relative timestamps.

pub mod num;
pub mod relative;

pub use num::{display_amount, fixed};
pub use relative::{relative_since, relative_time};
