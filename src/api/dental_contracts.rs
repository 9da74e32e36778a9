//! Dental equipment contract endpoints.

use serde::{Deserialize, Serialize};

use crate::net::client::{ApiClient, RequestDescriptor};
use crate::net::error::ApiError;
use crate::net::transport::Transport;
use crate::net::types::Envelope;

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DentalContract {
    pub id: i64,
    pub facility_id: i64,
    pub supplier_id: i64,
    pub contract_number: String,
    pub description: String,
    pub starts_on: String,
    pub ends_on: String,
    pub value: f64,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DentalContractPayload {
    pub facility_id: i64,
    pub supplier_id: i64,
    pub contract_number: String,
    pub description: String,
    pub starts_on: String,
    pub ends_on: String,
    pub value: f64,
}

pub async fn list<T: Transport>(
    api: &ApiClient<T>,
) -> Result<Envelope<Vec<DentalContract>>, ApiError> {
    api.call(RequestDescriptor::get("/dental/contracts").authenticated())
        .await
}

pub async fn get<T: Transport>(
    api: &ApiClient<T>,
    id: i64,
) -> Result<Envelope<DentalContract>, ApiError> {
    api.call(RequestDescriptor::get(format!("/dental/contracts/{id}")).authenticated())
        .await
}

pub async fn create<T: Transport>(
    api: &ApiClient<T>,
    payload: &DentalContractPayload,
) -> Result<Envelope<DentalContract>, ApiError> {
    api.call(
        RequestDescriptor::post("/dental/contracts")
            .with_json(payload)?
            .authenticated(),
    )
    .await
}

pub async fn update<T: Transport>(
    api: &ApiClient<T>,
    id: i64,
    payload: &DentalContractPayload,
) -> Result<Envelope<DentalContract>, ApiError> {
    api.call(
        RequestDescriptor::put(format!("/dental/contracts/{id}"))
            .with_json(payload)?
            .authenticated(),
    )
    .await
}

pub async fn delete<T: Transport>(
    api: &ApiClient<T>,
    id: i64,
) -> Result<Envelope<serde_json::Value>, ApiError> {
    api.call(RequestDescriptor::delete(format!("/dental/contracts/{id}")).authenticated())
        .await
}
