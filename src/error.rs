//! Error types for the dashboard.
//!
//! Fetch failures are typed so the UI can tell a dead backend from a
//! malformed payload; neither ever panics the polling loop.

use thiserror::Error;

/// Failure of a single GET against the dashboard backend.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport failure (DNS, connection refused, timeout, body read)
    #[error("network error on {endpoint}: {message}")]
    Network {
        endpoint: &'static str,
        message: String,
    },

    /// Server answered with a non-success status
    #[error("{endpoint} returned HTTP {status}: {message}")]
    Status {
        endpoint: &'static str,
        status: u16,
        message: String,
    },

    /// Body was not JSON, or not the expected shape
    #[error("could not decode {endpoint}: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    pub(crate) fn network(endpoint: &'static str, err: reqwest::Error) -> Self {
        FetchError::Network {
            endpoint,
            message: err.to_string(),
        }
    }
}

/// Top-level dashboard errors.
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// An element the UI binds to is missing (e.g. the WASM canvas)
    #[error("render target missing: {0}")]
    Render(String),
}
