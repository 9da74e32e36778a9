//! Wire types shared with the management API.
//!
//! Every endpoint except login answers with the generic [`Envelope`]; the
//! domain payload inside `data` is declared per façade method. The shapes
//! here must match the server field-for-field, so serialization round-trips
//! without adding, removing, or renaming anything.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::net::error::FieldErrors;

/// The `{success, message, data, errors}` contract returned by every
/// endpoint other than login.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound(serialize = "T: Serialize", deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
}

/// Authenticated user profile, stored JSON-encoded in the `_user` slot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: i64,
    pub username: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub permissions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Username/password pair posted to `/admin/login` or `/staff/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Successful login payload. Unlike everything else, the token fields sit
/// at the top level rather than inside an envelope `data` slot.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub token: String,
    pub token_type: String,
    pub expires_in: u64,
    pub user: Profile,
}

/// Navigation metadata posted to `/auth/verify` on every route check.
///
/// The server is the sole authorization decision point; the client only
/// relays where the user is trying to go.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RouteContext {
    pub route: String,
    #[serde(rename = "fullPath")]
    pub full_path: String,
    pub search: String,
    pub hash: String,
}

impl RouteContext {
    /// Assemble the context for a location split into path, search (`?..`)
    /// and hash (`#..`) parts, as `leptos_router` exposes them.
    pub fn new(pathname: &str, search: &str, hash: &str) -> Self {
        RouteContext {
            route: pathname.to_owned(),
            full_path: format!("{pathname}{search}{hash}"),
            search: search.to_owned(),
            hash: hash.to_owned(),
        }
    }
}
