//! Direct-purchase procurement endpoints.

use serde::{Deserialize, Serialize};

use crate::net::client::{ApiClient, RequestDescriptor};
use crate::net::error::ApiError;
use crate::net::transport::Transport;
use crate::net::types::Envelope;

/// A direct purchase as tracked from order to receipt.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DirectPurchase {
    pub id: i64,
    pub facility_id: i64,
    pub supplier_id: i64,
    pub item_name: String,
    pub quantity: i64,
    pub unit_price: f64,
    pub total_price: f64,
    pub status: String,
    pub ordered_on: String,
    #[serde(default)]
    pub received_on: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DirectPurchasePayload {
    pub facility_id: i64,
    pub supplier_id: i64,
    pub item_name: String,
    pub quantity: i64,
    pub unit_price: f64,
    pub ordered_on: String,
}

pub async fn list<T: Transport>(
    api: &ApiClient<T>,
) -> Result<Envelope<Vec<DirectPurchase>>, ApiError> {
    api.call(RequestDescriptor::get("/direct-purchases").authenticated())
        .await
}

pub async fn get<T: Transport>(
    api: &ApiClient<T>,
    id: i64,
) -> Result<Envelope<DirectPurchase>, ApiError> {
    api.call(RequestDescriptor::get(format!("/direct-purchases/{id}")).authenticated())
        .await
}

pub async fn create<T: Transport>(
    api: &ApiClient<T>,
    payload: &DirectPurchasePayload,
) -> Result<Envelope<DirectPurchase>, ApiError> {
    api.call(
        RequestDescriptor::post("/direct-purchases")
            .with_json(payload)?
            .authenticated(),
    )
    .await
}

pub async fn update<T: Transport>(
    api: &ApiClient<T>,
    id: i64,
    payload: &DirectPurchasePayload,
) -> Result<Envelope<DirectPurchase>, ApiError> {
    api.call(
        RequestDescriptor::put(format!("/direct-purchases/{id}"))
            .with_json(payload)?
            .authenticated(),
    )
    .await
}

/// Advance the procurement workflow (`ordered`, `received`, `cancelled`).
pub async fn update_status<T: Transport>(
    api: &ApiClient<T>,
    id: i64,
    status: &str,
) -> Result<Envelope<DirectPurchase>, ApiError> {
    api.call(
        RequestDescriptor::put(format!("/direct-purchases/{id}/status"))
            .with_json(&serde_json::json!({ "status": status }))?
            .authenticated(),
    )
    .await
}

pub async fn delete<T: Transport>(
    api: &ApiClient<T>,
    id: i64,
) -> Result<Envelope<serde_json::Value>, ApiError> {
    api.call(RequestDescriptor::delete(format!("/direct-purchases/{id}")).authenticated())
        .await
}
