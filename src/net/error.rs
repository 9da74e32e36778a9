//! API error taxonomy shared by every console request.
//!
//! Three kinds, checked by tag: `Authentication` (HTTP 401, session
//! invalidated), `Request` (any other non-2xx), and `Network` (no response
//! at all). Propagating with `?` keeps the tag intact, so a façade never
//! re-wraps an error that is already one of these.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::collections::HashMap;

/// Shown when the server answers 401 and the local session is discarded.
pub const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired. Please sign in again.";

/// Shown for a non-2xx response that carries no usable message of its own.
pub const REQUEST_FAILED_MESSAGE: &str = "The request could not be completed. Please try again.";

/// Shown when the request never produced an HTTP response.
pub const CONNECTION_FAILED_MESSAGE: &str = "Could not reach the server. Check your connection.";

/// Per-field validation messages as returned by the management API.
pub type FieldErrors = HashMap<String, Vec<String>>;

/// Classified failure of one API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// HTTP 401 from any endpoint. The credential for the resolved user
    /// type has already been cleared by the time this is observed.
    #[error("{message}")]
    Authentication { status: u16, message: String },

    /// Any other non-2xx response.
    #[error("{message}")]
    Request {
        status: u16,
        message: String,
        errors: Option<FieldErrors>,
    },

    /// Transport-level failure: nothing came back.
    #[error("{message}")]
    Network { message: String },
}

impl ApiError {
    /// The 401 case, with the fixed session-expired message.
    pub fn authentication() -> Self {
        ApiError::Authentication {
            status: 401,
            message: SESSION_EXPIRED_MESSAGE.to_owned(),
        }
    }

    /// A non-2xx failure; `message` falls back to the generic string when
    /// the server supplied none.
    pub fn request(status: u16, message: Option<String>, errors: Option<FieldErrors>) -> Self {
        ApiError::Request {
            status,
            message: message.unwrap_or_else(|| REQUEST_FAILED_MESSAGE.to_owned()),
            errors,
        }
    }

    /// A transport failure, with the fixed connection-failed message.
    pub fn network() -> Self {
        ApiError::Network {
            message: CONNECTION_FAILED_MESSAGE.to_owned(),
        }
    }

    /// HTTP status, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Authentication { status, .. } | ApiError::Request { status, .. } => {
                Some(*status)
            }
            ApiError::Network { .. } => None,
        }
    }

    pub fn is_authentication(&self) -> bool {
        matches!(self, ApiError::Authentication { .. })
    }
}
