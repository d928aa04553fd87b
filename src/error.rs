//! Application Errors

use thiserror::Error;

/// Errors surfaced by the search and detail flows
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    /// Input rejected before any request was made
    #[error("{0}")]
    Validation(String),

    /// Request failed or its body could not be used
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// Ways a recipe API request can fail
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    #[error("HTTP error! status: {0}")]
    Status(u16),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response body: {0}")]
    Decode(String),
}

impl AppError {
    pub fn empty_ingredients() -> Self {
        AppError::Validation("Please enter at least one ingredient".to_string())
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Fetch(err.into())
    }
}
