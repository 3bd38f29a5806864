//! Server address for the remote search service.

use serde::{Deserialize, Serialize};

use crate::error::RequestError;

/// Conventional port for Elasticsearch-style search servers.
pub const DEFAULT_PORT: u16 = 9200;

/// Hostname and port of the remote search server.
///
/// One `ServerAddr` identifies the server a single operation talks to. The
/// port defaults to [`DEFAULT_PORT`] when unset or zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerAddr {
    /// Hostname of the search server (e.g. `localhost`).
    pub hostname: String,

    /// Port the search server listens on.
    pub port: u16,
}

impl ServerAddr {
    /// Create a server address.
    ///
    /// `port` may be `None` or `Some(0)`, both of which fall back to
    /// [`DEFAULT_PORT`].
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::MissingField`] if `hostname` is empty.
    pub fn new(
        hostname: impl Into<String>,
        port: impl Into<Option<u16>>,
    ) -> Result<Self, RequestError> {
        let hostname = hostname.into();
        if hostname.is_empty() {
            return Err(RequestError::MissingField("hostname"));
        }
        let port = match port.into() {
            None | Some(0) => DEFAULT_PORT,
            Some(p) => p,
        };
        Ok(Self { hostname, port })
    }

    /// Base HTTP URL for this server, e.g. `http://localhost:9200`.
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.hostname, self.port)
    }
}

impl std::fmt::Display for ServerAddr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.hostname, self.port)
    }
}
