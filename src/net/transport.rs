//! HTTP transport seam between the API client and the browser fetch API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): a stub that reports the transport as unavailable,
//! since the console only talks to the management API from the browser.
//!
//! The `Transport` trait exists so the request/response classification in
//! [`crate::net::client`] stays free of WASM types and runs under native
//! unit tests against a canned transport.

#![allow(clippy::unused_async)]

use std::future::Future;

/// HTTP methods used by the console.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// A fully assembled request, ready for the wire.
///
/// Header construction (content type, bearer token) happens in the client
/// before this record is built; the transport only ships it.
#[derive(Clone, Debug)]
pub struct TransportRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// A raw response: status code plus the unparsed body text.
#[derive(Clone, Debug)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    /// Whether the status is in the 2xx success range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport-level failure: the request never produced an HTTP response.
#[derive(Clone, Debug, thiserror::Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Failed(String),
    #[error("http transport is not available in this environment")]
    Unavailable,
}

/// Issues an assembled request and returns the raw response.
pub trait Transport {
    fn send(
        &self,
        request: &TransportRequest,
    ) -> impl Future<Output = Result<TransportResponse, TransportError>>;
}

/// Browser fetch transport backed by `gloo-net`.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

impl Transport for FetchTransport {
    async fn send(
        &self,
        request: &TransportRequest,
    ) -> Result<TransportResponse, TransportError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;

            let mut builder = match request.method {
                Method::Get => Request::get(&request.url),
                Method::Post => Request::post(&request.url),
                Method::Put => Request::put(&request.url),
                Method::Delete => Request::delete(&request.url),
            };
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }

            let built = match &request.body {
                Some(body) => builder
                    .body(body.clone())
                    .map_err(|e| TransportError::Failed(e.to_string()))?,
                None => builder
                    .build()
                    .map_err(|e| TransportError::Failed(e.to_string()))?,
            };

            let response = built
                .send()
                .await
                .map_err(|e| TransportError::Failed(e.to_string()))?;
            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|e| TransportError::Failed(e.to_string()))?;

            Ok(TransportResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(TransportError::Unavailable)
        }
    }
}
