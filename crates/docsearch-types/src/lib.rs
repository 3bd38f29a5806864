//! # docsearch-types
//!
//! Shared domain types for the docsearch adapter.
//!
//! This crate defines the core data structures used throughout the system:
//! - Per-operation requests ([`CreateRequest`], [`UpdateRequest`],
//!   [`DestroyRequest`], [`SearchRequest`]) with constructor-time validation
//! - [`Outcome`]: the closed set of results an adapter operation can produce
//! - [`Hit`]: a single matched document returned by a search
//! - [`ServerAddr`]: hostname/port of the remote search server
//! - [`ClientError`]: the structured error taxonomy of the wire layer
//!
//! ## Usage
//!
//! ```rust
//! use docsearch_types::{Outcome, SearchRequest, ServerAddr};
//!
//! let server = ServerAddr::new("localhost", None).unwrap();
//! let req = SearchRequest::new(server, "cute dogs").unwrap();
//! ```

pub mod addr;
pub mod error;
pub mod hit;
pub mod outcome;
pub mod request;

pub use addr::{ServerAddr, DEFAULT_PORT};
pub use error::{ClientError, RequestError};
pub use hit::Hit;
pub use outcome::Outcome;
pub use request::{
    CreateRequest, DestroyRequest, Document, SearchRequest, UpdateRequest, DEFAULT_DOC_TYPE,
};
