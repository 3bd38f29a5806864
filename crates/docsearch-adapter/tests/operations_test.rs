//! Behavioral tests of the four operations against an in-memory store.

mod support;

use pretty_assertions::assert_eq;
use serde_json::json;

use docsearch_adapter::Adapter;
use docsearch_types::{
    CreateRequest, DestroyRequest, Document, Outcome, SearchRequest, ServerAddr, UpdateRequest,
};
use support::StoreConnector;

fn server() -> ServerAddr {
    ServerAddr::new("localhost", None).unwrap()
}

fn doc(name: &str) -> Document {
    let mut doc = Document::new();
    doc.insert("name".to_string(), json!(name));
    doc
}

#[tokio::test]
async fn test_create_then_destroy_round_trip() {
    let (connector, _tally) = StoreConnector::new();
    let adapter = Adapter::with_connector(connector);

    let create = CreateRequest::new(server(), "widgets", doc("a")).unwrap();
    let id = adapter.create(&create).await.success().unwrap();

    let destroy = DestroyRequest::new(server(), "widgets", id.as_str()).unwrap();
    assert!(
        adapter.destroy(&destroy).await.is_success(),
        "destroying a freshly created id must succeed"
    );
}

#[tokio::test]
async fn test_destroy_is_not_idempotent_success() {
    let (connector, _tally) = StoreConnector::new();
    let adapter = Adapter::with_connector(connector);

    let create = CreateRequest::new(server(), "widgets", doc("a")).unwrap();
    let id = adapter.create(&create).await.success().unwrap();

    let destroy = DestroyRequest::new(server(), "widgets", id.as_str()).unwrap();
    assert!(adapter.destroy(&destroy).await.is_success());

    // The id is gone now; a repeat destroy reports the miss, not success.
    assert!(matches!(
        adapter.destroy(&destroy).await,
        Outcome::DocumentNotFound
    ));
}

#[tokio::test]
async fn test_update_replaces_existing_document() {
    let (connector, _tally) = StoreConnector::new();
    let adapter = Adapter::with_connector(connector);

    let create = CreateRequest::new(server(), "widgets", doc("a")).unwrap();
    let id = adapter.create(&create).await.success().unwrap();

    let update = UpdateRequest::new(server(), "widgets", id.as_str(), doc("b")).unwrap();
    assert!(adapter.update(&update).await.is_success());

    let search = SearchRequest::new(server(), "name:b")
        .unwrap()
        .with_index("widgets");
    let hits = adapter.search(&search).await.success().unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].source.as_ref().unwrap()["name"], "b");
}

#[tokio::test]
async fn test_update_of_missing_document() {
    let (connector, _tally) = StoreConnector::new();
    let adapter = Adapter::with_connector(connector);

    let update = UpdateRequest::new(server(), "widgets", "nope", doc("b")).unwrap();
    assert!(matches!(
        adapter.update(&update).await,
        Outcome::DocumentNotFound
    ));
}

#[tokio::test]
async fn test_search_scopes_to_index() {
    let (connector, _tally) = StoreConnector::new();
    let adapter = Adapter::with_connector(connector);

    let widgets = CreateRequest::new(server(), "widgets", doc("a")).unwrap();
    adapter.create(&widgets).await.success().unwrap();
    let gadgets = CreateRequest::new(server(), "gadgets", doc("b")).unwrap();
    adapter.create(&gadgets).await.success().unwrap();

    let scoped = SearchRequest::new(server(), "*")
        .unwrap()
        .with_index("widgets");
    assert_eq!(adapter.search(&scoped).await.success().unwrap().len(), 1);

    let all = SearchRequest::new(server(), "*").unwrap();
    assert_eq!(adapter.search(&all).await.success().unwrap().len(), 2);
}

#[tokio::test]
async fn test_search_ids_projects_hit_ids() {
    let (connector, _tally) = StoreConnector::new();
    let adapter = Adapter::with_connector(connector);

    let create = CreateRequest::new(server(), "widgets", doc("a")).unwrap();
    let id = adapter.create(&create).await.success().unwrap();

    let search = SearchRequest::new(server(), "*").unwrap();
    let ids = adapter.search_ids(&search).await.success().unwrap();
    assert_eq!(ids, vec![id]);
}
