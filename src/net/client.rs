//! Single choke point for every call the console makes to the management
//! API.
//!
//! The client carries its configuration (base URL) and a handle to the
//! token store; it is constructed once at startup and passed to the
//! façades, never reached through a global.
//!
//! CLASSIFICATION ORDER
//! ====================
//! Within one call: resolve user type, build headers, send, then classify
//! the outcome. A 401 clears the resolved credential *before* the error is
//! returned, so by the time a caller sees the failure the local session is
//! already gone. Nothing is retried.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::net::error::{ApiError, FieldErrors};
use crate::net::transport::{FetchTransport, Method, Transport, TransportRequest};
use crate::session::token_store::{TokenStore, UserType};

/// Path prefix every endpoint is resolved against.
pub const DEFAULT_BASE_URL: &str = "/api/v1";

/// One planned request: where it goes and how it authenticates.
#[derive(Clone, Debug)]
pub struct RequestDescriptor {
    pub method: Method,
    pub endpoint: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
    pub requires_auth: bool,
    pub user_type: Option<UserType>,
}

impl RequestDescriptor {
    fn new(method: Method, endpoint: impl Into<String>) -> Self {
        RequestDescriptor {
            method,
            endpoint: endpoint.into(),
            headers: Vec::new(),
            body: None,
            requires_auth: false,
            user_type: None,
        }
    }

    pub fn get(endpoint: impl Into<String>) -> Self {
        RequestDescriptor::new(Method::Get, endpoint)
    }

    pub fn post(endpoint: impl Into<String>) -> Self {
        RequestDescriptor::new(Method::Post, endpoint)
    }

    pub fn put(endpoint: impl Into<String>) -> Self {
        RequestDescriptor::new(Method::Put, endpoint)
    }

    pub fn delete(endpoint: impl Into<String>) -> Self {
        RequestDescriptor::new(Method::Delete, endpoint)
    }

    /// Attach a JSON body. A value that cannot be serialized never reaches
    /// the wire, which the caller sees as a network failure.
    pub fn with_json<B: Serialize>(mut self, body: &B) -> Result<Self, ApiError> {
        match serde_json::to_string(body) {
            Ok(encoded) => {
                self.body = Some(encoded);
                Ok(self)
            }
            Err(err) => {
                log::warn!("request body for {} could not be encoded: {err}", self.endpoint);
                Err(ApiError::network())
            }
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Ask for a bearer token. If the resolved user type has no token the
    /// request still goes out unauthenticated; the server is the sole
    /// arbiter of authorization.
    pub fn authenticated(mut self) -> Self {
        self.requires_auth = true;
        self
    }

    /// Pin the session namespace instead of resolving it from the store.
    pub fn for_user(mut self, user_type: UserType) -> Self {
        self.user_type = Some(user_type);
        self
    }
}

/// The API client: base URL, token store handle, and a transport.
#[derive(Clone)]
pub struct ApiClient<T: Transport> {
    base_url: String,
    store: TokenStore,
    transport: T,
}

/// The client as the application shell uses it.
pub type Api = ApiClient<FetchTransport>;

impl Api {
    /// Browser client against the default base URL and `localStorage`.
    pub fn browser() -> Self {
        ApiClient::new(DEFAULT_BASE_URL, TokenStore::browser(), FetchTransport)
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn new(base_url: impl Into<String>, store: TokenStore, transport: T) -> Self {
        ApiClient {
            base_url: base_url.into(),
            store,
            transport,
        }
    }

    /// The token store this client invalidates through.
    pub fn store(&self) -> &TokenStore {
        &self.store
    }

    /// Issue a request and decode the 2xx body as `D`.
    ///
    /// Failures come back as the three-way [`ApiError`] taxonomy. On a 401
    /// the resolved user type's credential is cleared first, whatever the
    /// endpoint and whether or not authentication was requested.
    pub async fn call<D: DeserializeOwned>(
        &self,
        descriptor: RequestDescriptor,
    ) -> Result<D, ApiError> {
        let user_type = descriptor
            .user_type
            .unwrap_or_else(|| self.store.current_user_type());

        let mut headers = vec![
            ("Content-Type".to_owned(), "application/json".to_owned()),
            ("Accept".to_owned(), "application/json".to_owned()),
        ];
        headers.extend(descriptor.headers);
        if descriptor.requires_auth {
            if let Some(token) = self.store.read(user_type) {
                headers.push(("Authorization".to_owned(), format!("Bearer {token}")));
            }
        }

        let request = TransportRequest {
            method: descriptor.method,
            url: format!("{}{}", self.base_url, descriptor.endpoint),
            headers,
            body: descriptor.body,
        };

        let response = match self.transport.send(&request).await {
            Ok(response) => response,
            Err(err) => {
                log::warn!("{} {} did not complete: {err}", request.method.as_str(), request.url);
                return Err(ApiError::network());
            }
        };

        if response.status == 401 {
            self.store.clear(user_type);
            return Err(ApiError::authentication());
        }

        if !response.is_success() {
            let (message, errors) = error_payload(&response.body);
            return Err(ApiError::request(response.status, message, errors));
        }

        serde_json::from_str(&response.body).map_err(|err| {
            log::warn!("{} returned a malformed body: {err}", request.url);
            ApiError::network()
        })
    }
}

/// Mine an error body for the server's message and field errors. A body
/// that is not JSON yields neither; the status alone still reaches the
/// caller.
fn error_payload(body: &str) -> (Option<String>, Option<FieldErrors>) {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return (None, None);
    };
    let message = value
        .get("message")
        .and_then(|m| m.as_str())
        .map(ToOwned::to_owned);
    let errors = value
        .get("errors")
        .cloned()
        .and_then(|e| serde_json::from_value::<FieldErrors>(e).ok());
    (message, errors)
}
