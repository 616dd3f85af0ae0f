//! Error type for the todo list fetch.
//!
//! # Design
//! There is only one kind of failure from the consumer's point of view:
//! the fetch did not produce a list. The variants record why, so a caller
//! that asks via `TodoListAdapter::join` can tell a dead server from a bad
//! payload.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced a response (connection refused, reset, ...).
    #[error("transport failed: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body was not a JSON array.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The fetch task was cancelled or panicked before it finished.
    #[error("fetch task aborted: {0}")]
    Aborted(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Transport(err.to_string())
    }
}
