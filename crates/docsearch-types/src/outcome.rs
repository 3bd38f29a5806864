//! The closed set of results an adapter operation can produce.

use crate::error::ClientError;

/// Result of one adapter operation.
///
/// Exactly one variant is produced per invocation; the classifier is total,
/// so no raw error ever escapes the adapter. Callers branch on the variant
/// tag. The string-matching work is done once, inside the classifier.
#[derive(Debug)]
pub enum Outcome<T> {
    /// The operation completed and the response had the expected shape.
    Success(T),

    /// Could not reach the server, or every pooled connection is dead.
    /// Transient; a caller may choose to retry later.
    ConnectionFailure,

    /// The target index does not exist.
    IndexNotFound,

    /// No document with the given id and type exists in the index.
    /// Reachable from update and destroy only.
    DocumentNotFound,

    /// The remote call nominally succeeded but the response violated the
    /// expected shape. Indicates a server version mismatch or bug.
    MalformedResponse(String),

    /// Anything the classifier could not pattern-match. Carries the raw
    /// error for diagnostics.
    Unclassified(ClientError),
}

impl<T> Outcome<T> {
    /// Map the success payload, leaving every other variant untouched.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U> {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::ConnectionFailure => Outcome::ConnectionFailure,
            Outcome::IndexNotFound => Outcome::IndexNotFound,
            Outcome::DocumentNotFound => Outcome::DocumentNotFound,
            Outcome::MalformedResponse(reason) => Outcome::MalformedResponse(reason),
            Outcome::Unclassified(err) => Outcome::Unclassified(err),
        }
    }

    /// Whether this is [`Outcome::Success`].
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// The success payload, if any.
    pub fn success(self) -> Option<T> {
        match self {
            Outcome::Success(value) => Some(value),
            _ => None,
        }
    }

    /// Stable name of the variant, e.g. for logs and structured output.
    pub fn tag(&self) -> &'static str {
        match self {
            Outcome::Success(_) => "success",
            Outcome::ConnectionFailure => "connection_failure",
            Outcome::IndexNotFound => "index_not_found",
            Outcome::DocumentNotFound => "document_not_found",
            Outcome::MalformedResponse(_) => "malformed_response",
            Outcome::Unclassified(_) => "unclassified_error",
        }
    }
}
