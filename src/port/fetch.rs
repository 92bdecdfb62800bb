// SPDX-License-Identifier: MPL-2.0
//! Page-fetch port definition.

use async_trait::async_trait;
use std::fmt;

/// Errors that can occur while fetching a target document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The server answered with a non-success status code.
    Status(u16),
    /// The request never produced a response (connection refused, DNS,
    /// aborted body read).
    Network(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Status(code) => write!(f, "Failed to fetch page: {}", code),
            FetchError::Network(msg) => write!(f, "Network error: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

/// Port for fetching same-origin HTML documents.
///
/// There is deliberately no timeout here: a hung request hangs the transition
/// until the embedder's own network layer gives up and surfaces the failure
/// as [`FetchError::Network`].
#[async_trait(?Send)]
pub trait PageFetcher {
    /// Fetches the document at `path` and returns its full markup.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] on non-success status or network failure.
    async fn fetch(&self, path: &str) -> Result<String, FetchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_display_carries_code() {
        let err = FetchError::Status(404);
        assert_eq!(format!("{}", err), "Failed to fetch page: 404");
    }

    #[test]
    fn network_error_display_carries_message() {
        let err = FetchError::Network("connection reset".to_string());
        assert!(format!("{}", err).contains("connection reset"));
    }
}
