//! The single failure type surfaced by the API gateway client.
//!
//! Every failure source - transport errors, non-2xx statuses, unparsable
//! bodies - collapses into one [`ApiError`] carrying a human-readable
//! message. Callers never see raw transport detail.

use serde::Deserialize;

/// An operation against the catalog server failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    message: String,
}

impl ApiError {
    /// Wrap a human-readable failure message.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The user-facing failure message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Best-effort shape of the server's JSON error body.
///
/// The server also sends `statusCode` and `error` fields; only `message` is
/// consumed here.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub message: Option<String>,
}
