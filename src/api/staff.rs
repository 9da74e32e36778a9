//! Staff administration endpoints.

use serde::{Deserialize, Serialize};

use crate::net::client::{ApiClient, RequestDescriptor};
use crate::net::error::ApiError;
use crate::net::transport::Transport;
use crate::net::types::Envelope;

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct StaffMember {
    pub id: i64,
    pub username: String,
    pub name: String,
    pub email: String,
    pub role: String,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    pub active: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// Create/update payload. `password` is only sent when set, so updates
/// can leave it untouched.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StaffPayload {
    pub username: String,
    pub name: String,
    pub email: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

pub async fn list<T: Transport>(
    api: &ApiClient<T>,
) -> Result<Envelope<Vec<StaffMember>>, ApiError> {
    api.call(RequestDescriptor::get("/staff").authenticated())
        .await
}

pub async fn get<T: Transport>(
    api: &ApiClient<T>,
    id: i64,
) -> Result<Envelope<StaffMember>, ApiError> {
    api.call(RequestDescriptor::get(format!("/staff/{id}")).authenticated())
        .await
}

pub async fn create<T: Transport>(
    api: &ApiClient<T>,
    payload: &StaffPayload,
) -> Result<Envelope<StaffMember>, ApiError> {
    api.call(
        RequestDescriptor::post("/staff")
            .with_json(payload)?
            .authenticated(),
    )
    .await
}

pub async fn update<T: Transport>(
    api: &ApiClient<T>,
    id: i64,
    payload: &StaffPayload,
) -> Result<Envelope<StaffMember>, ApiError> {
    api.call(
        RequestDescriptor::put(format!("/staff/{id}"))
            .with_json(payload)?
            .authenticated(),
    )
    .await
}

pub async fn delete<T: Transport>(
    api: &ApiClient<T>,
    id: i64,
) -> Result<Envelope<serde_json::Value>, ApiError> {
    api.call(RequestDescriptor::delete(format!("/staff/{id}")).authenticated())
        .await
}
