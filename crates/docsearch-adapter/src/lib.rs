//! # docsearch-adapter
//!
//! The operation adapter: four document-store operations (create, update,
//! destroy, search) against a remote search service, each producing exactly
//! one [`Outcome`](docsearch_types::Outcome) from a closed set.
//!
//! The two pieces with real decision logic live here:
//!
//! - the per-call client lifecycle: acquire a handle, issue exactly one
//!   request, release the handle on every exit path ([`Adapter`])
//! - the outcome classifier: reduce the service's loosely-typed failures and
//!   success shapes to the closed outcome set ([`classify`])
//!
//! Control flow is strictly linear per operation: acquire, translate and
//! send, classify, release, report. No shared state across operations, and
//! no retries; retry policy is a caller concern.
//!
//! # Example
//!
//! ```rust,no_run
//! use docsearch_adapter::Adapter;
//! use docsearch_types::{Outcome, SearchRequest, ServerAddr};
//!
//! # async fn run() {
//! let adapter = Adapter::new();
//! let server = ServerAddr::new("localhost", None).unwrap();
//! let req = SearchRequest::new(server, "cute dogs").unwrap();
//! match adapter.search(&req).await {
//!     Outcome::Success(hits) => println!("{} hits", hits.len()),
//!     Outcome::ConnectionFailure => eprintln!("server unreachable"),
//!     other => eprintln!("{}", other.tag()),
//! }
//! # }
//! ```

pub mod adapter;
pub mod classify;

pub use adapter::Adapter;
