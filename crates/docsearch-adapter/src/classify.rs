//! The outcome classifier.
//!
//! Takes the raw result of one remote call and resolves it to exactly one
//! [`Outcome`] variant. The classifier is total: every error and every
//! success shape, including empty or garbage responses, maps to a variant.
//! Never a panic, never a raw error escaping to the caller.
//!
//! Classification is first-match-wins and structured-first: the client's
//! error categories are matched before the substring fallbacks that older
//! servers make necessary (`IndexMissingException[...]`,
//! `No Living connections`, `Not Found`). The match table lives here, in one
//! place, and is unit-tested without a network.

use docsearch_client::{DeleteResponse, IndexResponse, SearchResponse};
use docsearch_types::{ClientError, Hit, Outcome};

/// Error category after matching, before the per-operation outcome tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ErrorClass {
    /// No usable connection to the server.
    Connection,
    /// The target index does not exist.
    IndexMissing,
    /// The addressed document does not exist.
    DocumentMissing,
    /// Nothing matched; surface the raw error.
    Other,
}

/// Centralized error match table.
fn class_of(err: &ClientError) -> ErrorClass {
    match err {
        ClientError::NoLivingConnections { .. } => ErrorClass::Connection,
        ClientError::ResponseError {
            status,
            kind,
            reason,
        } => {
            if let Some(kind) = kind.as_deref() {
                match kind {
                    "index_not_found_exception" => return ErrorClass::IndexMissing,
                    "document_missing_exception" => return ErrorClass::DocumentMissing,
                    _ => {}
                }
            }
            class_of_message(reason, *status)
        }
        ClientError::Unexpected(message) => class_of_message(message, 0),
        ClientError::Decode(_) | ClientError::InvalidAddress(_) => ErrorClass::Other,
    }
}

/// Substring fallback for servers that only report free-text messages.
fn class_of_message(message: &str, status: u16) -> ErrorClass {
    if message.contains("No Living connections") {
        ErrorClass::Connection
    } else if message.contains("IndexMissingException") {
        ErrorClass::IndexMissing
    } else if status == 404 || message.contains("Not Found") {
        ErrorClass::DocumentMissing
    } else {
        ErrorClass::Other
    }
}

/// Classify a create result.
///
/// A well-formed create response carries the generated `_id` and confirms
/// creation (`created: true` on older servers, `result: "created"` on newer
/// ones). A document-missing error has no meaning for create and falls into
/// the unclassified bucket.
pub fn create_outcome(raw: Result<IndexResponse, ClientError>) -> Outcome<String> {
    match raw {
        Ok(resp) => {
            let confirmed =
                resp.created == Some(true) || resp.result.as_deref() == Some("created");
            match resp.id {
                Some(id) if confirmed => Outcome::Success(id),
                Some(_) => Outcome::MalformedResponse(
                    "response does not confirm creation".to_string(),
                ),
                None => Outcome::MalformedResponse(
                    "response is missing the generated document id".to_string(),
                ),
            }
        }
        Err(ClientError::Decode(reason)) => Outcome::MalformedResponse(reason),
        Err(err) => match class_of(&err) {
            ErrorClass::Connection => Outcome::ConnectionFailure,
            ErrorClass::IndexMissing => Outcome::IndexNotFound,
            ErrorClass::DocumentMissing | ErrorClass::Other => Outcome::Unclassified(err),
        },
    }
}

/// Classify an update (full replace) result.
///
/// Any well-formed response is success; update extracts nothing from it.
pub fn update_outcome(raw: Result<IndexResponse, ClientError>) -> Outcome<()> {
    match raw {
        Ok(_) => Outcome::Success(()),
        Err(err) => not_found_aware(err),
    }
}

/// Classify a destroy result.
pub fn destroy_outcome(raw: Result<DeleteResponse, ClientError>) -> Outcome<()> {
    match raw {
        Ok(_) => Outcome::Success(()),
        Err(err) => not_found_aware(err),
    }
}

/// Shared error table for the id-addressed operations, where a not-found is
/// a semantic condition rather than an anomaly.
fn not_found_aware(err: ClientError) -> Outcome<()> {
    match class_of(&err) {
        ErrorClass::Connection => Outcome::ConnectionFailure,
        ErrorClass::IndexMissing => Outcome::IndexNotFound,
        ErrorClass::DocumentMissing => Outcome::DocumentNotFound,
        ErrorClass::Other => Outcome::Unclassified(err),
    }
}

/// Classify a search result.
///
/// A well-formed search response carries the hit list at `hits.hits`; a
/// response without it is malformed even though the call nominally
/// succeeded.
pub fn search_outcome(raw: Result<SearchResponse, ClientError>) -> Outcome<Vec<Hit>> {
    match raw {
        Ok(resp) => match resp.hits.and_then(|envelope| envelope.hits) {
            Some(hits) => Outcome::Success(hits),
            None => Outcome::MalformedResponse(
                "response is missing the hits container".to_string(),
            ),
        },
        Err(ClientError::Decode(reason)) => Outcome::MalformedResponse(reason),
        Err(err) => match class_of(&err) {
            ErrorClass::Connection => Outcome::ConnectionFailure,
            ErrorClass::IndexMissing => Outcome::IndexNotFound,
            ErrorClass::DocumentMissing | ErrorClass::Other => Outcome::Unclassified(err),
        },
    }
}
