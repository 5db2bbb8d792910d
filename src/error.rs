//! Error handling for the filefetch library.
//!
//! Every operation in the crate returns [`Result`], whose error side is the
//! single [`Error`] enum. Failures that the fetch logic detects itself are
//! reported as [`Error::Fetch`] and carry nothing but a human-readable
//! message; lower-level failures from the filesystem or the HTTP stack are
//! propagated as they are.

use std::io;
use thiserror::Error;

/// Errors that can happen when fetching a resource.
#[derive(Error, Debug)]
pub enum Error {
    /// The fetch itself failed.
    ///
    /// Raised for an unsupported URL scheme, a missing or inaccessible local
    /// path, a non-success HTTP status and an unusable credential. The
    /// `Display` output is exactly `message`.
    #[error("{message}")]
    Fetch {
        message: String,
        #[source]
        source: Option<io::Error>,
    },

    /// Error from the underlying URL parser or the expected URL format.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// I/O Error.
    ///
    /// Wraps errors raised while copying, reading or writing files.
    #[error("I/O error: {source}")]
    IOError {
        #[from]
        source: io::Error,
    },

    /// Error from the Reqwest library.
    ///
    /// Raised while building the client or reading a response body.
    #[error("Reqwest error: {source}")]
    Reqwest {
        #[from]
        source: reqwest::Error,
    },

    /// Error from the middleware stack wrapping the HTTP client.
    #[error("Request error: {source}")]
    Middleware {
        #[from]
        source: reqwest_middleware::Error,
    },
}

impl Error {
    /// Creates an [`Error::Fetch`] from a message.
    pub fn fetch(message: impl Into<String>) -> Self {
        Error::Fetch {
            message: message.into(),
            source: None,
        }
    }

    /// Creates an [`Error::Fetch`] keeping the I/O error that caused it.
    ///
    /// The message is unchanged; the cause is only reachable through
    /// [`std::error::Error::source`].
    pub fn fetch_with_source(message: impl Into<String>, source: io::Error) -> Self {
        Error::Fetch {
            message: message.into(),
            source: Some(source),
        }
    }

    /// Returns the message when this is an [`Error::Fetch`].
    pub fn fetch_message(&self) -> Option<&str> {
        match self {
            Error::Fetch { message, .. } => Some(message.as_str()),
            _ => None,
        }
    }
}

/// Result type alias for operations that can fail with a filefetch error.
pub type Result<T> = std::result::Result<T, Error>;
