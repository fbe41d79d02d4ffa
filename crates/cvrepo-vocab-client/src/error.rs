//! Errors returned by the vocabulary client.

use thiserror::Error;

use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum VocabApiError {
    /// Transport-level failure (connection refused, timeout, TLS).
    #[error("HTTP request to {endpoint} failed: {source}")]
    Http {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-success status.
    #[error("{endpoint} returned {status}: {body}")]
    ApiError {
        endpoint: String,
        status: u16,
        body: String,
    },

    /// The requested project or collection is unknown to the service.
    #[error("{endpoint}: not found")]
    NotFound { endpoint: String },

    #[error("cannot decode response from {endpoint}: {source}")]
    Deserialization {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The base URL cannot carry path segments (e.g. `mailto:`).
    #[error("base URL '{0}' cannot be used for API requests")]
    InvalidBaseUrl(String),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}
