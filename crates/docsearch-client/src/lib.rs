//! # docsearch-client
//!
//! The boundary to the remote search service.
//!
//! This crate provides:
//! - [`SearchService`] and [`Connect`]: the traits the adapter is generic
//!   over, so tests can swap in mock implementations without a network
//! - [`EsClient`] / [`HttpConnector`]: the production implementation
//!   speaking the Elasticsearch document API over HTTP
//! - parsing of the server's loosely-typed error bodies into the structured
//!   [`ClientError`](docsearch_types::ClientError) categories
//!
//! # Example
//!
//! ```rust,no_run
//! use docsearch_client::{Connect, HttpConnector, SearchParams, SearchService};
//! use docsearch_types::ServerAddr;
//!
//! # async fn run() -> Result<(), docsearch_types::ClientError> {
//! let addr = ServerAddr::new("localhost", None).unwrap();
//! let mut client = HttpConnector::default().connect(&addr).await?;
//! let response = client
//!     .search(SearchParams {
//!         index: Some("widgets".to_string()),
//!         query: "cute dogs".to_string(),
//!     })
//!     .await?;
//! client.close().await;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod service;

pub use client::{EsClient, HttpConnector};
pub use service::{
    Connect, DeleteParams, DeleteResponse, HitsEnvelope, IndexParams, IndexResponse, SearchParams,
    SearchResponse, SearchService,
};
