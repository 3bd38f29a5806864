//! Per-operation request types.
//!
//! Each operation kind has its own request struct whose constructor
//! validates the fields that operation requires. An empty required field
//! never reaches dispatch; deeper semantics of the document payload and the
//! query string are opaque to the adapter.

use serde_json::{Map, Value};

use crate::addr::ServerAddr;
use crate::error::RequestError;

/// Document type applied when none is given.
pub const DEFAULT_DOC_TYPE: &str = "default";

/// An opaque document payload: a JSON object of arbitrary fields.
pub type Document = Map<String, Value>;

fn doc_type_or_default(doc_type: impl Into<String>) -> String {
    let doc_type = doc_type.into();
    if doc_type.is_empty() {
        DEFAULT_DOC_TYPE.to_string()
    } else {
        doc_type
    }
}

/// Store a new document, making it searchable.
#[derive(Debug, Clone)]
pub struct CreateRequest {
    pub server: ServerAddr,
    /// Index the document should be stored in.
    pub index: String,
    /// Document type, defaulting to [`DEFAULT_DOC_TYPE`].
    pub doc_type: String,
    /// The document to store.
    pub document: Document,
}

impl CreateRequest {
    /// # Errors
    ///
    /// Returns [`RequestError::MissingField`] if `index` is empty.
    pub fn new(
        server: ServerAddr,
        index: impl Into<String>,
        document: Document,
    ) -> Result<Self, RequestError> {
        let index = index.into();
        if index.is_empty() {
            return Err(RequestError::MissingField("index"));
        }
        Ok(Self {
            server,
            index,
            doc_type: DEFAULT_DOC_TYPE.to_string(),
            document,
        })
    }

    /// Set the document type. An empty value keeps the default.
    pub fn with_doc_type(mut self, doc_type: impl Into<String>) -> Self {
        self.doc_type = doc_type_or_default(doc_type);
        self
    }
}

/// Replace (reindex) the document with the given id.
///
/// This is a full replace, not a partial patch.
#[derive(Debug, Clone)]
pub struct UpdateRequest {
    pub server: ServerAddr,
    pub index: String,
    pub doc_type: String,
    /// Unique id of the document to replace.
    pub id: String,
    /// The new document.
    pub document: Document,
}

impl UpdateRequest {
    /// # Errors
    ///
    /// Returns [`RequestError::MissingField`] if `index` or `id` is empty.
    pub fn new(
        server: ServerAddr,
        index: impl Into<String>,
        id: impl Into<String>,
        document: Document,
    ) -> Result<Self, RequestError> {
        let index = index.into();
        if index.is_empty() {
            return Err(RequestError::MissingField("index"));
        }
        let id = id.into();
        if id.is_empty() {
            return Err(RequestError::MissingField("id"));
        }
        Ok(Self {
            server,
            index,
            doc_type: DEFAULT_DOC_TYPE.to_string(),
            id,
            document,
        })
    }

    /// Set the document type. An empty value keeps the default.
    pub fn with_doc_type(mut self, doc_type: impl Into<String>) -> Self {
        self.doc_type = doc_type_or_default(doc_type);
        self
    }
}

/// Delete the document with the given id.
#[derive(Debug, Clone)]
pub struct DestroyRequest {
    pub server: ServerAddr,
    pub index: String,
    pub doc_type: String,
    /// Unique id of the document to delete.
    pub id: String,
}

impl DestroyRequest {
    /// # Errors
    ///
    /// Returns [`RequestError::MissingField`] if `index` or `id` is empty.
    pub fn new(
        server: ServerAddr,
        index: impl Into<String>,
        id: impl Into<String>,
    ) -> Result<Self, RequestError> {
        let index = index.into();
        if index.is_empty() {
            return Err(RequestError::MissingField("index"));
        }
        let id = id.into();
        if id.is_empty() {
            return Err(RequestError::MissingField("id"));
        }
        Ok(Self {
            server,
            index,
            doc_type: DEFAULT_DOC_TYPE.to_string(),
            id,
        })
    }

    /// Set the document type. An empty value keeps the default.
    pub fn with_doc_type(mut self, doc_type: impl Into<String>) -> Self {
        self.doc_type = doc_type_or_default(doc_type);
        self
    }
}

/// Full-text search across all indexed fields.
///
/// The query string is passed through to the server untouched; it supports
/// whatever query-parser syntax the server implements.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub server: ServerAddr,
    /// Index to search. When absent the search spans all indices.
    pub index: Option<String>,
    /// The search query, opaque to the adapter.
    pub query: String,
}

impl SearchRequest {
    /// # Errors
    ///
    /// Returns [`RequestError::MissingField`] if `query` is empty.
    pub fn new(server: ServerAddr, query: impl Into<String>) -> Result<Self, RequestError> {
        let query = query.into();
        if query.is_empty() {
            return Err(RequestError::MissingField("query"));
        }
        Ok(Self {
            server,
            index: None,
            query,
        })
    }

    /// Restrict the search to one index. An empty value leaves the search
    /// unrestricted.
    pub fn with_index(mut self, index: impl Into<String>) -> Self {
        let index = index.into();
        self.index = if index.is_empty() { None } else { Some(index) };
        self
    }
}
