//! Dental asset inventory endpoints.

use serde::{Deserialize, Serialize};

use crate::net::client::{ApiClient, RequestDescriptor};
use crate::net::error::ApiError;
use crate::net::transport::Transport;
use crate::net::types::Envelope;

/// A piece of dental equipment tracked per facility, optionally tied to
/// the contract it was delivered under.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DentalAsset {
    pub id: i64,
    pub facility_id: i64,
    #[serde(default)]
    pub contract_id: Option<i64>,
    pub name: String,
    pub serial_number: String,
    pub condition: String,
    pub purchased_on: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DentalAssetPayload {
    pub facility_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_id: Option<i64>,
    pub name: String,
    pub serial_number: String,
    pub condition: String,
    pub purchased_on: String,
}

pub async fn list<T: Transport>(
    api: &ApiClient<T>,
) -> Result<Envelope<Vec<DentalAsset>>, ApiError> {
    api.call(RequestDescriptor::get("/dental/assets").authenticated())
        .await
}

pub async fn get<T: Transport>(
    api: &ApiClient<T>,
    id: i64,
) -> Result<Envelope<DentalAsset>, ApiError> {
    api.call(RequestDescriptor::get(format!("/dental/assets/{id}")).authenticated())
        .await
}

pub async fn create<T: Transport>(
    api: &ApiClient<T>,
    payload: &DentalAssetPayload,
) -> Result<Envelope<DentalAsset>, ApiError> {
    api.call(
        RequestDescriptor::post("/dental/assets")
            .with_json(payload)?
            .authenticated(),
    )
    .await
}

pub async fn update<T: Transport>(
    api: &ApiClient<T>,
    id: i64,
    payload: &DentalAssetPayload,
) -> Result<Envelope<DentalAsset>, ApiError> {
    api.call(
        RequestDescriptor::put(format!("/dental/assets/{id}"))
            .with_json(payload)?
            .authenticated(),
    )
    .await
}

pub async fn delete<T: Transport>(
    api: &ApiClient<T>,
    id: i64,
) -> Result<Envelope<serde_json::Value>, ApiError> {
    api.call(RequestDescriptor::delete(format!("/dental/assets/{id}")).authenticated())
        .await
}
