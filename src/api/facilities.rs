//! Facility reference data and settings endpoints.

use serde::{Deserialize, Serialize};

use crate::net::client::{ApiClient, RequestDescriptor};
use crate::net::error::ApiError;
use crate::net::transport::Transport;
use crate::net::types::Envelope;

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Facility {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub address: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FacilityPayload {
    pub name: String,
    pub code: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

pub async fn list<T: Transport>(api: &ApiClient<T>) -> Result<Envelope<Vec<Facility>>, ApiError> {
    api.call(RequestDescriptor::get("/facilities").authenticated())
        .await
}

pub async fn get<T: Transport>(
    api: &ApiClient<T>,
    id: i64,
) -> Result<Envelope<Facility>, ApiError> {
    api.call(RequestDescriptor::get(format!("/facilities/{id}")).authenticated())
        .await
}

pub async fn create<T: Transport>(
    api: &ApiClient<T>,
    payload: &FacilityPayload,
) -> Result<Envelope<Facility>, ApiError> {
    api.call(
        RequestDescriptor::post("/facilities")
            .with_json(payload)?
            .authenticated(),
    )
    .await
}

pub async fn update<T: Transport>(
    api: &ApiClient<T>,
    id: i64,
    payload: &FacilityPayload,
) -> Result<Envelope<Facility>, ApiError> {
    api.call(
        RequestDescriptor::put(format!("/facilities/{id}"))
            .with_json(payload)?
            .authenticated(),
    )
    .await
}

pub async fn delete<T: Transport>(
    api: &ApiClient<T>,
    id: i64,
) -> Result<Envelope<serde_json::Value>, ApiError> {
    api.call(RequestDescriptor::delete(format!("/facilities/{id}")).authenticated())
        .await
}
