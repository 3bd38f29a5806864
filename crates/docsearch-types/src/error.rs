//! Error types shared across the docsearch crates.

use thiserror::Error;

/// Errors produced when constructing an operation request.
///
/// Required fields are validated at construction, so an invalid request never
/// reaches dispatch.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    /// A required field was empty or absent.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

/// Errors raised by the wire layer when talking to the search server.
///
/// The remote service reports failures in several loosely-typed shapes: a
/// transport-level failure, a structured error body (`error.type` +
/// `error.reason`), a legacy string error body, or nothing useful at all.
/// The client reduces all of them to these categories so the outcome
/// classifier can match on structure instead of scraping free text.
#[derive(Debug, Error)]
pub enum ClientError {
    /// No usable connection to the server: connection refused, all pooled
    /// connections dead, or the socket timed out before a response arrived.
    #[error("No living connections to {addr}: {message}")]
    NoLivingConnections { addr: String, message: String },

    /// The server answered with an error status.
    ///
    /// `kind` is the structured error type when the body carried one
    /// (e.g. `index_not_found_exception`); `reason` is the human-readable
    /// message, which for legacy servers may be the only signal available
    /// (e.g. `IndexMissingException[[widgets] missing]`).
    #[error("Search service error (HTTP {status}): {reason}")]
    ResponseError {
        status: u16,
        kind: Option<String>,
        reason: String,
    },

    /// A nominally successful response whose body could not be decoded.
    #[error("Failed to decode response body: {0}")]
    Decode(String),

    /// The server address could not be used to build a client.
    #[error("Invalid server address: {0}")]
    InvalidAddress(String),

    /// An error carrying no structure to match on (raw string, empty
    /// object). Preserved as-is for diagnostics.
    #[error("{0}")]
    Unexpected(String),
}

impl ClientError {
    /// Create an unexpected error from a raw message.
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected(message.into())
    }

    /// Create a decode error.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }
}
