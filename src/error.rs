//! Error types for extraction and persistence.

use crate::status::{ParseStatusError, TransitionError};
use thiserror::Error;

/// Result type alias for store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Why a page fetch failed.
///
/// Fetch failures never escape [`Extractor::scrape_job_page`]: they are
/// logged and collapsed into an all-null record. The type exists so the
/// failure can be classified on the way down.
///
/// [`Extractor::scrape_job_page`]: crate::Extractor::scrape_job_page
#[derive(Error, Debug)]
pub enum FetchError {
    /// Failed to construct the HTTP client
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The request exceeded the configured timeout and was aborted
    #[error("request timed out")]
    TimedOut,

    /// The server answered with a non-success status
    #[error("unexpected HTTP status: {0}")]
    Status(reqwest::StatusCode),

    /// Network or protocol error from the transport
    #[error("http request failed: {0}")]
    Http(reqwest::Error),
}

impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            FetchError::TimedOut
        } else {
            FetchError::Http(error)
        }
    }
}

/// Errors from the job record store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Identifier was zero or negative
    #[error("invalid job id: {0}")]
    InvalidId(i64),

    /// No row with the given identifier
    #[error("job with id {0} not found")]
    NotFound(i64),

    /// Job URL missing or not HTTP(S)
    #[error("invalid job URL: {0:?}")]
    InvalidUrl(String),

    /// A stored status value is outside the vocabulary
    #[error(transparent)]
    Status(#[from] ParseStatusError),

    /// The requested status change is not a legal lifecycle transition
    #[error(transparent)]
    Transition(#[from] TransitionError),

    /// Underlying database failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}
