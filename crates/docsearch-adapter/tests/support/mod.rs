//! Test doubles for the search-service boundary.
//!
//! `ScriptedConnector` replays canned replies and tallies every connect,
//! call, and close so tests can assert the lifecycle invariant.
//! `StoreConnector` backs the service with an in-memory document store for
//! behavioral tests (round trips, idempotence).

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use docsearch_client::{
    Connect, DeleteParams, DeleteResponse, HitsEnvelope, IndexParams, IndexResponse, SearchParams,
    SearchResponse, SearchService,
};
use docsearch_types::{ClientError, Hit, ServerAddr};

/// Counters shared between a connector, its services, and the test body.
#[derive(Debug, Default)]
pub struct Tally {
    pub connects: AtomicUsize,
    pub calls: AtomicUsize,
    pub closes: AtomicUsize,
}

impl Tally {
    pub fn connects(&self) -> usize {
        self.connects.load(Ordering::SeqCst)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn closes(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }
}

/// One canned reply for whichever call the operation makes.
pub enum Reply {
    Index(Result<IndexResponse, ClientError>),
    Delete(Result<DeleteResponse, ClientError>),
    Search(Result<SearchResponse, ClientError>),
}

/// Connector that hands each operation a service primed with the next
/// scripted reply. `failing()` refuses the connection instead.
pub struct ScriptedConnector {
    tally: Arc<Tally>,
    replies: Mutex<VecDeque<Reply>>,
    refuse_connect: bool,
}

impl ScriptedConnector {
    pub fn new(replies: Vec<Reply>) -> (Self, Arc<Tally>) {
        let tally = Arc::new(Tally::default());
        (
            Self {
                tally: tally.clone(),
                replies: Mutex::new(replies.into()),
                refuse_connect: false,
            },
            tally,
        )
    }

    /// A connector whose `connect` always fails.
    pub fn failing() -> (Self, Arc<Tally>) {
        let (mut connector, tally) = Self::new(vec![]);
        connector.refuse_connect = true;
        (connector, tally)
    }
}

#[async_trait]
impl Connect for ScriptedConnector {
    type Service = ScriptedService;

    async fn connect(&self, addr: &ServerAddr) -> Result<Self::Service, ClientError> {
        if self.refuse_connect {
            return Err(ClientError::NoLivingConnections {
                addr: addr.to_string(),
                message: "connection refused".to_string(),
            });
        }
        self.tally.connects.fetch_add(1, Ordering::SeqCst);
        let reply = self.replies.lock().unwrap().pop_front();
        Ok(ScriptedService {
            tally: self.tally.clone(),
            reply: Mutex::new(reply),
        })
    }
}

pub struct ScriptedService {
    tally: Arc<Tally>,
    reply: Mutex<Option<Reply>>,
}

impl ScriptedService {
    fn take_reply(&self) -> Reply {
        self.tally.calls.fetch_add(1, Ordering::SeqCst);
        self.reply
            .lock()
            .unwrap()
            .take()
            .expect("no scripted reply left for this operation")
    }
}

#[async_trait]
impl SearchService for ScriptedService {
    async fn index(&self, _params: IndexParams) -> Result<IndexResponse, ClientError> {
        match self.take_reply() {
            Reply::Index(result) => result,
            _ => panic!("scripted reply is not an index reply"),
        }
    }

    async fn delete(&self, _params: DeleteParams) -> Result<DeleteResponse, ClientError> {
        match self.take_reply() {
            Reply::Delete(result) => result,
            _ => panic!("scripted reply is not a delete reply"),
        }
    }

    async fn search(&self, _params: SearchParams) -> Result<SearchResponse, ClientError> {
        match self.take_reply() {
            Reply::Search(result) => result,
            _ => panic!("scripted reply is not a search reply"),
        }
    }

    async fn close(&mut self) {
        self.tally.closes.fetch_add(1, Ordering::SeqCst);
    }
}

/// In-memory document store shared by every service a [`StoreConnector`]
/// hands out.
#[derive(Debug, Default)]
pub struct Store {
    next_id: AtomicUsize,
    docs: Mutex<HashMap<(String, String, String), Value>>,
}

pub struct StoreConnector {
    store: Arc<Store>,
    tally: Arc<Tally>,
}

impl StoreConnector {
    pub fn new() -> (Self, Arc<Tally>) {
        let tally = Arc::new(Tally::default());
        (
            Self {
                store: Arc::new(Store::default()),
                tally: tally.clone(),
            },
            tally,
        )
    }
}

#[async_trait]
impl Connect for StoreConnector {
    type Service = StoreService;

    async fn connect(&self, _addr: &ServerAddr) -> Result<Self::Service, ClientError> {
        self.tally.connects.fetch_add(1, Ordering::SeqCst);
        Ok(StoreService {
            store: self.store.clone(),
            tally: self.tally.clone(),
        })
    }
}

pub struct StoreService {
    store: Arc<Store>,
    tally: Arc<Tally>,
}

#[async_trait]
impl SearchService for StoreService {
    async fn index(&self, params: IndexParams) -> Result<IndexResponse, ClientError> {
        self.tally.calls.fetch_add(1, Ordering::SeqCst);
        let mut docs = self.store.docs.lock().unwrap();
        match params.id {
            None => {
                let id = format!("doc-{}", self.store.next_id.fetch_add(1, Ordering::SeqCst) + 1);
                docs.insert(
                    (params.index, params.doc_type, id.clone()),
                    Value::Object(params.body),
                );
                Ok(IndexResponse {
                    id: Some(id),
                    created: Some(true),
                    result: Some("created".to_string()),
                })
            }
            Some(id) => {
                let key = (params.index, params.doc_type, id.clone());
                if !docs.contains_key(&key) {
                    return Err(ClientError::ResponseError {
                        status: 404,
                        kind: Some("document_missing_exception".to_string()),
                        reason: format!("[{id}]: document missing"),
                    });
                }
                docs.insert(key, Value::Object(params.body));
                Ok(IndexResponse {
                    id: Some(id),
                    created: Some(false),
                    result: Some("updated".to_string()),
                })
            }
        }
    }

    async fn delete(&self, params: DeleteParams) -> Result<DeleteResponse, ClientError> {
        self.tally.calls.fetch_add(1, Ordering::SeqCst);
        let mut docs = self.store.docs.lock().unwrap();
        let key = (params.index, params.doc_type, params.id);
        if docs.remove(&key).is_none() {
            return Err(ClientError::ResponseError {
                status: 404,
                kind: None,
                reason: "Not Found".to_string(),
            });
        }
        Ok(DeleteResponse {
            found: Some(true),
            result: Some("deleted".to_string()),
        })
    }

    async fn search(&self, params: SearchParams) -> Result<SearchResponse, ClientError> {
        self.tally.calls.fetch_add(1, Ordering::SeqCst);
        let docs = self.store.docs.lock().unwrap();
        let hits = docs
            .iter()
            .filter(|((index, _, _), _)| {
                params.index.as_deref().map_or(true, |wanted| wanted == index)
            })
            .map(|((index, doc_type, id), source)| Hit {
                id: id.clone(),
                index: index.clone(),
                doc_type: Some(doc_type.clone()),
                score: Some(1.0),
                source: Some(source.clone()),
            })
            .collect();
        Ok(SearchResponse {
            hits: Some(HitsEnvelope { hits: Some(hits) }),
        })
    }

    async fn close(&mut self) {
        self.tally.closes.fetch_add(1, Ordering::SeqCst);
    }
}
