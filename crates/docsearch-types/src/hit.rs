//! Search hit records.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single matched document returned by a search operation.
///
/// Field names follow the wire format of the search service (`_id`,
/// `_index`, ...). `source` is the stored document, opaque to the adapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hit {
    /// Unique id of the matched document.
    #[serde(rename = "_id")]
    pub id: String,

    /// Index the document lives in.
    #[serde(rename = "_index", default)]
    pub index: String,

    /// Document type, absent on newer server versions.
    #[serde(rename = "_type", default, skip_serializing_if = "Option::is_none")]
    pub doc_type: Option<String>,

    /// Relevance score assigned by the server.
    #[serde(rename = "_score", default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,

    /// The stored document body.
    #[serde(rename = "_source", default, skip_serializing_if = "Option::is_none")]
    pub source: Option<Value>,
}
