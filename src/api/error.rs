//! Failure modes of the users fetch.
//!
//! The `Display` text of each variant is what ends up in
//! `AppState::error` and is shown to the user verbatim.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP client could not be constructed.
    #[error("HTTP client setup failed: {0}")]
    Setup(#[source] reqwest::Error),

    /// Connection refused, DNS failure, reset mid-body, ...
    #[error("Network error while requesting {url}: {source}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-2xx status.
    #[error("Request failed with status code {status}")]
    Status { status: u16, url: String },

    /// Body was not a JSON array of users.
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Request timed out after {seconds}s")]
    Timeout { seconds: u64 },
}

impl FetchError {
    /// Whether the request reached the server at all.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Connection { .. } | Self::Timeout { .. })
    }
}
