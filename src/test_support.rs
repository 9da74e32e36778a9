//! Test doubles for the unit tests: a canned-response transport and a
//! client wired to in-memory storage.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::Arc;

use crate::net::client::ApiClient;
use crate::net::transport::{Transport, TransportError, TransportRequest, TransportResponse};
use crate::session::storage::MemoryStorage;
use crate::session::token_store::TokenStore;

/// Transport that replays canned responses and records every request.
/// Clones share the same queue and log.
#[derive(Clone, Default)]
pub struct MockTransport {
    responses: Rc<RefCell<VecDeque<Result<TransportResponse, TransportError>>>>,
    calls: Rc<RefCell<Vec<TransportRequest>>>,
}

impl MockTransport {
    pub fn replying(responses: Vec<Result<TransportResponse, TransportError>>) -> Self {
        MockTransport {
            responses: Rc::new(RefCell::new(responses.into())),
            calls: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn calls(&self) -> Vec<TransportRequest> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl Transport for MockTransport {
    async fn send(
        &self,
        request: &TransportRequest,
    ) -> Result<TransportResponse, TransportError> {
        self.calls.borrow_mut().push(request.clone());
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Failed("no canned response left".to_owned())))
    }
}

/// A 2xx (or any) response with a JSON body.
pub fn response(status: u16, body: serde_json::Value) -> Result<TransportResponse, TransportError> {
    Ok(TransportResponse {
        status,
        body: body.to_string(),
    })
}

/// A response whose body is raw text, e.g. a proxy's HTML error page.
pub fn text_response(status: u16, body: &str) -> Result<TransportResponse, TransportError> {
    Ok(TransportResponse {
        status,
        body: body.to_owned(),
    })
}

/// A transport-level failure: the request never completed.
pub fn network_failure() -> Result<TransportResponse, TransportError> {
    Err(TransportError::Failed("connection reset".to_owned()))
}

/// Client over a mock transport and fresh in-memory storage. The returned
/// storage handle shares state with the client's token store.
pub fn test_client(
    responses: Vec<Result<TransportResponse, TransportError>>,
) -> (ApiClient<MockTransport>, MockTransport, MemoryStorage) {
    let storage = MemoryStorage::new();
    let store = TokenStore::new(Arc::new(storage.clone()));
    let transport = MockTransport::replying(responses);
    let client = ApiClient::new("/api/v1", store, transport.clone());
    (client, transport, storage)
}

/// The standard success envelope body used across tests.
pub fn ok_envelope(data: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "success": true,
        "message": "ok",
        "data": data
    })
}
