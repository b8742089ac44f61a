//! Network URL and currency defaults.

/// Default REST API base URL (the API key is appended as the next path segment).
pub const DEFAULT_API_URL: &str = "https://v6.exchangerate-api.com/v6";

/// Base currency used for the currency listing call.
pub const DEFAULT_BASE_CURRENCY: &str = "USD";

/// Source currency selected after startup.
pub const DEFAULT_FROM: &str = "USD";

/// Target currency selected after startup.
pub const DEFAULT_TO: &str = "INR";
