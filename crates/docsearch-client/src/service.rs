//! The search-service traits and wire-level request/response shapes.
//!
//! The adapter is generic over [`Connect`] and [`SearchService`] so the
//! production HTTP client and in-memory test doubles are interchangeable.

use async_trait::async_trait;
use serde::Deserialize;

use docsearch_types::{ClientError, Document, Hit, ServerAddr};

/// Parameters for an index call (create when `id` is absent, full replace
/// when it is present).
#[derive(Debug, Clone)]
pub struct IndexParams {
    pub index: String,
    pub doc_type: String,
    pub id: Option<String>,
    pub body: Document,
}

/// Parameters for a delete call.
#[derive(Debug, Clone)]
pub struct DeleteParams {
    pub index: String,
    pub doc_type: String,
    pub id: String,
}

/// Parameters for a search call. `index: None` searches all indices.
#[derive(Debug, Clone)]
pub struct SearchParams {
    pub index: Option<String>,
    pub query: String,
}

/// Response to an index call.
///
/// Every field is optional: shape validation is the classifier's job, not
/// the decoder's. Older servers confirm creation with `created: bool`,
/// newer ones with `result: "created"`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IndexResponse {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub created: Option<bool>,
    #[serde(default)]
    pub result: Option<String>,
}

/// Response to a delete call.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeleteResponse {
    #[serde(default)]
    pub found: Option<bool>,
    #[serde(default)]
    pub result: Option<String>,
}

/// Response to a search call.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub hits: Option<HitsEnvelope>,
}

/// The hits container nested inside a search response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HitsEnvelope {
    #[serde(default)]
    pub hits: Option<Vec<Hit>>,
}

/// One connection/session to the remote search service.
///
/// A handle is owned exclusively by a single in-flight operation: created at
/// operation start, closed at operation end on every exit path. Dropping a
/// handle without calling [`close`](SearchService::close) also releases the
/// underlying resources.
#[async_trait]
pub trait SearchService: Send + Sync {
    /// Index a document. Creates when `params.id` is `None`, fully replaces
    /// otherwise.
    async fn index(&self, params: IndexParams) -> Result<IndexResponse, ClientError>;

    /// Delete a document by id.
    async fn delete(&self, params: DeleteParams) -> Result<DeleteResponse, ClientError>;

    /// Full-text search with an opaque query string.
    async fn search(&self, params: SearchParams) -> Result<SearchResponse, ClientError>;

    /// Release the connection. Called exactly once per operation.
    async fn close(&mut self);
}

/// Produces a [`SearchService`] handle bound to a server address.
#[async_trait]
pub trait Connect: Send + Sync {
    type Service: SearchService;

    /// Acquire a handle to the server at `addr`.
    async fn connect(&self, addr: &ServerAddr) -> Result<Self::Service, ClientError>;
}
