//! Reduction of the server's loosely-typed failures to [`ClientError`].
//!
//! Error bodies arrive in several shapes depending on server version:
//!
//! - structured: `{"error": {"type": "index_not_found_exception", "reason": "..."}}`
//! - legacy string: `{"error": "IndexMissingException[[widgets] missing]"}`
//! - no body at all, or something that is not JSON
//!
//! All of them reduce to [`ClientError::ResponseError`] here, carrying the
//! structured `kind` when one exists so the outcome classifier can match on
//! it instead of scraping message text.

use docsearch_types::ClientError;
use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<Value>,
}

/// Build a [`ClientError`] from an error-status response.
pub fn error_from_response(status: u16, body: &str) -> ClientError {
    let (kind, reason) = match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            error: Some(Value::String(message)),
        }) => (None, message),
        Ok(ErrorBody {
            error: Some(Value::Object(fields)),
        }) => {
            let kind = fields
                .get("type")
                .and_then(Value::as_str)
                .map(str::to_string);
            let reason = fields
                .get("reason")
                .and_then(Value::as_str)
                .map_or_else(|| default_reason(status), str::to_string);
            (kind, reason)
        }
        _ => (None, default_reason(status)),
    };
    ClientError::ResponseError {
        status,
        kind,
        reason,
    }
}

/// Build a [`ClientError`] from a transport-level failure.
pub fn transport_error(addr: &str, err: &reqwest::Error) -> ClientError {
    if err.is_connect() || err.is_timeout() {
        ClientError::NoLivingConnections {
            addr: addr.to_string(),
            message: err.to_string(),
        }
    } else {
        ClientError::Unexpected(err.to_string())
    }
}

fn default_reason(status: u16) -> String {
    match status {
        404 => "Not Found".to_string(),
        other => format!("HTTP {other}"),
    }
}
