//! Unified error types.

use thiserror::Error;

/// Top-level converter error.
#[derive(Error, Debug)]
pub enum FxError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    /// The API answered, but not with `result: "success"`.
    #[error("API error: result={result} error_type={error_type:?}")]
    Api {
        result: String,
        error_type: Option<String>,
    },

    #[error("Chart error: {0}")]
    Chart(String),

    #[error("{0}")]
    Other(String),
}

impl FxError {
    /// True for input errors raised before any network call.
    pub fn is_validation(&self) -> bool {
        matches!(self, FxError::Validation(_))
    }

    /// The API's `error-type` string, when the failure came from the API itself.
    pub fn api_error_type(&self) -> Option<&str> {
        match self {
            FxError::Api { error_type, .. } => error_type.as_deref(),
            _ => None,
        }
    }
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Not found: {0}")]
    NotFound(String),
}
