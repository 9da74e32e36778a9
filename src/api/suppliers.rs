//! Supplier reference data endpoints.

use serde::{Deserialize, Serialize};

use crate::net::client::{ApiClient, RequestDescriptor};
use crate::net::error::ApiError;
use crate::net::transport::Transport;
use crate::net::types::Envelope;

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Supplier {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub contact_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SupplierPayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

pub async fn list<T: Transport>(api: &ApiClient<T>) -> Result<Envelope<Vec<Supplier>>, ApiError> {
    api.call(RequestDescriptor::get("/suppliers").authenticated())
        .await
}

pub async fn create<T: Transport>(
    api: &ApiClient<T>,
    payload: &SupplierPayload,
) -> Result<Envelope<Supplier>, ApiError> {
    api.call(
        RequestDescriptor::post("/suppliers")
            .with_json(payload)?
            .authenticated(),
    )
    .await
}

pub async fn update<T: Transport>(
    api: &ApiClient<T>,
    id: i64,
    payload: &SupplierPayload,
) -> Result<Envelope<Supplier>, ApiError> {
    api.call(
        RequestDescriptor::put(format!("/suppliers/{id}"))
            .with_json(payload)?
            .authenticated(),
    )
    .await
}

pub async fn delete<T: Transport>(
    api: &ApiClient<T>,
    id: i64,
) -> Result<Envelope<serde_json::Value>, ApiError> {
    api.call(RequestDescriptor::delete(format!("/suppliers/{id}")).authenticated())
        .await
}
