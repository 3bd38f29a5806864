//! The operation adapter and its per-call client lifecycle.

use futures::future::BoxFuture;
use tracing::{debug, error, warn};

use docsearch_client::{
    Connect, DeleteParams, HttpConnector, IndexParams, SearchParams, SearchService,
};
use docsearch_types::{
    ClientError, CreateRequest, DestroyRequest, Hit, Outcome, SearchRequest, ServerAddr,
    UpdateRequest,
};

use crate::classify;

/// The operation adapter.
///
/// Generic over a [`Connect`] implementation so tests can inject a mock
/// service; production code uses [`Adapter::new`], which talks HTTP.
///
/// Each operation acquires its own client handle, issues exactly one remote
/// call, and releases the handle before classifying. The handle never
/// outlives the call, and shape extraction runs on owned data after release,
/// so a malformed response can never leak a connection.
pub struct Adapter<C: Connect = HttpConnector> {
    connector: C,
}

impl Adapter<HttpConnector> {
    /// Adapter over the production HTTP client.
    pub fn new() -> Self {
        Self {
            connector: HttpConnector::new(),
        }
    }
}

impl Default for Adapter<HttpConnector> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Connect> Adapter<C> {
    /// Adapter over a caller-supplied connector.
    pub fn with_connector(connector: C) -> Self {
        Self { connector }
    }

    /// Scoped client acquisition: acquire, run the supplied call exactly
    /// once, release unconditionally, then hand the raw result back for
    /// classification.
    async fn dispatch<R, F>(&self, server: &ServerAddr, call: F) -> Result<R, ClientError>
    where
        F: for<'a> FnOnce(&'a C::Service) -> BoxFuture<'a, Result<R, ClientError>> + Send,
        R: Send,
    {
        let mut client = self.connector.connect(server).await?;
        let result = call(&client).await;
        client.close().await;
        result
    }

    /// Store a new document, making it searchable.
    ///
    /// Returns the server-generated id on success.
    pub async fn create(&self, req: &CreateRequest) -> Outcome<String> {
        debug!(server = %req.server, index = %req.index, "create document");
        let params = IndexParams {
            index: req.index.clone(),
            doc_type: req.doc_type.clone(),
            id: None,
            body: req.document.clone(),
        };
        let raw = self
            .dispatch(&req.server, move |client| client.index(params))
            .await;
        report("create", classify::create_outcome(raw))
    }

    /// Replace (reindex) the document with the given id.
    pub async fn update(&self, req: &UpdateRequest) -> Outcome<()> {
        debug!(server = %req.server, index = %req.index, id = %req.id, "update document");
        let params = IndexParams {
            index: req.index.clone(),
            doc_type: req.doc_type.clone(),
            id: Some(req.id.clone()),
            body: req.document.clone(),
        };
        let raw = self
            .dispatch(&req.server, move |client| client.index(params))
            .await;
        report("update", classify::update_outcome(raw))
    }

    /// Delete the document with the given id.
    ///
    /// Destroying an id that no longer exists reports
    /// [`Outcome::DocumentNotFound`], not success. Deletion is observable,
    /// not blind.
    pub async fn destroy(&self, req: &DestroyRequest) -> Outcome<()> {
        debug!(server = %req.server, index = %req.index, id = %req.id, "destroy document");
        let params = DeleteParams {
            index: req.index.clone(),
            doc_type: req.doc_type.clone(),
            id: req.id.clone(),
        };
        let raw = self
            .dispatch(&req.server, move |client| client.delete(params))
            .await;
        report("destroy", classify::destroy_outcome(raw))
    }

    /// Full-text search, returning the matched hit records.
    pub async fn search(&self, req: &SearchRequest) -> Outcome<Vec<Hit>> {
        debug!(server = %req.server, query = %req.query, "search");
        let params = SearchParams {
            index: req.index.clone(),
            query: req.query.clone(),
        };
        let raw = self
            .dispatch(&req.server, move |client| client.search(params))
            .await;
        report("search", classify::search_outcome(raw))
    }

    /// Full-text search, projected down to the matched document ids.
    ///
    /// Same classification as [`search`](Adapter::search); only the
    /// projection differs.
    pub async fn search_ids(&self, req: &SearchRequest) -> Outcome<Vec<String>> {
        self.search(req)
            .await
            .map(|hits| hits.into_iter().map(|hit| hit.id).collect())
    }
}

/// Log the classified outcome at a severity matching its meaning.
fn report<T>(op: &'static str, outcome: Outcome<T>) -> Outcome<T> {
    match &outcome {
        Outcome::Success(_) => debug!(op, "operation succeeded"),
        Outcome::ConnectionFailure => warn!(op, "no living connections to the search server"),
        Outcome::IndexNotFound => warn!(op, "index does not exist"),
        Outcome::DocumentNotFound => warn!(op, "document does not exist"),
        Outcome::MalformedResponse(reason) => {
            error!(op, reason = %reason, "malformed response from search server");
        }
        Outcome::Unclassified(err) => error!(op, error = %err, "unclassified search error"),
    }
    outcome
}
