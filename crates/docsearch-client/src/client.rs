//! HTTP implementation of the search-service boundary.

use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use docsearch_types::{ClientError, ServerAddr};

use crate::error::{error_from_response, transport_error};
use crate::service::{
    Connect, DeleteParams, DeleteResponse, IndexParams, IndexResponse, SearchParams,
    SearchResponse, SearchService,
};

/// Default request timeout for remote calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Produces [`EsClient`] handles. One handle per operation; the connector
/// itself holds no connections.
#[derive(Debug, Clone, Default)]
pub struct HttpConnector {
    timeout: Option<Duration>,
}

impl HttpConnector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

#[async_trait]
impl Connect for HttpConnector {
    type Service = EsClient;

    async fn connect(&self, addr: &ServerAddr) -> Result<Self::Service, ClientError> {
        debug!(server = %addr, "acquiring search client");
        let http = reqwest::Client::builder()
            .timeout(self.timeout.unwrap_or(REQUEST_TIMEOUT))
            .build()
            .map_err(|e| ClientError::InvalidAddress(e.to_string()))?;
        Ok(EsClient {
            http: Some(http),
            base_url: addr.base_url(),
            addr: addr.to_string(),
        })
    }
}

/// A client handle speaking the Elasticsearch document API over HTTP.
///
/// Construction is lazy: no connection is opened until the first request.
/// [`close`](SearchService::close) tears down the connection pool; dropping
/// the handle has the same effect.
#[derive(Debug)]
pub struct EsClient {
    http: Option<reqwest::Client>,
    base_url: String,
    addr: String,
}

impl EsClient {
    fn http(&self) -> Result<&reqwest::Client, ClientError> {
        self.http
            .as_ref()
            .ok_or_else(|| ClientError::unexpected("client already closed"))
    }

    /// Check the status, then decode the body, reducing every failure shape
    /// to a [`ClientError`] category.
    async fn read_response<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::unexpected(e.to_string()))?;
        if !status.is_success() {
            return Err(error_from_response(status.as_u16(), &body));
        }
        serde_json::from_str(&body).map_err(|e| ClientError::decode(e.to_string()))
    }

    /// Deletes report a missing document as 404 with `found: false` in the
    /// body; that is an error category, not a success with an odd shape.
    async fn read_delete_response(response: Response) -> Result<DeleteResponse, ClientError> {
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            let body = response.text().await.unwrap_or_default();
            return Err(error_from_response(status.as_u16(), &body));
        }
        Self::read_response(response).await
    }
}

#[async_trait]
impl SearchService for EsClient {
    async fn index(&self, params: IndexParams) -> Result<IndexResponse, ClientError> {
        let url = match &params.id {
            Some(id) => format!("{}/{}/{}/{}", self.base_url, params.index, params.doc_type, id),
            None => format!("{}/{}/{}", self.base_url, params.index, params.doc_type),
        };
        debug!(url = %url, "index document");
        let response = self
            .http()?
            .post(&url)
            .json(&params.body)
            .send()
            .await
            .map_err(|e| transport_error(&self.addr, &e))?;
        Self::read_response(response).await
    }

    async fn delete(&self, params: DeleteParams) -> Result<DeleteResponse, ClientError> {
        let url = format!(
            "{}/{}/{}/{}",
            self.base_url, params.index, params.doc_type, params.id
        );
        debug!(url = %url, "delete document");
        let response = self
            .http()?
            .delete(&url)
            .send()
            .await
            .map_err(|e| transport_error(&self.addr, &e))?;
        Self::read_delete_response(response).await
    }

    async fn search(&self, params: SearchParams) -> Result<SearchResponse, ClientError> {
        let url = match &params.index {
            Some(index) => format!("{}/{}/_search", self.base_url, index),
            None => format!("{}/_search", self.base_url),
        };
        debug!(url = %url, query = %params.query, "search");
        let response = self
            .http()?
            .get(&url)
            .query(&[("q", params.query.as_str())])
            .send()
            .await
            .map_err(|e| transport_error(&self.addr, &e))?;
        Self::read_response(response).await
    }

    async fn close(&mut self) {
        debug!(server = %self.addr, "releasing search client");
        self.http = None;
    }
}
