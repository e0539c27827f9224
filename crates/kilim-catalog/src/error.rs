//! Internal error types for catalog operations.
//!
//! These errors are internal to `kilim-catalog` and are mapped to the core
//! port's `CatalogError` at the boundary.

use thiserror::Error;

use kilim_core::CatalogError;

/// Result type alias for catalog operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors related to catalog API operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// API request failed with an HTTP error status.
    #[error("Catalog API request failed with status {status}: {url}")]
    RequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// The requested product was not found.
    #[error("Product {id} not found")]
    ProductNotFound {
        /// The product id that was not found
        id: u64,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl From<ApiError> for CatalogError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::ProductNotFound { id } => Self::NotFound { id },
            ApiError::RequestFailed { status, url } => Self::Api { status, url },
            ApiError::Network(e) => Self::Network(e.to_string()),
            ApiError::InvalidUrl(e) => Self::InvalidResponse(e.to_string()),
            ApiError::JsonParse(e) => Self::InvalidResponse(e.to_string()),
        }
    }
}
