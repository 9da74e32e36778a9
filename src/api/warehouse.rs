//! Supply warehouse endpoints: the item catalog and per-item stock
//! movements.

use serde::{Deserialize, Serialize};

use crate::net::client::{ApiClient, RequestDescriptor};
use crate::net::error::ApiError;
use crate::net::transport::Transport;
use crate::net::types::Envelope;

/// A stocked supply item.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct StockItem {
    pub id: i64,
    pub facility_id: i64,
    pub name: String,
    pub unit: String,
    pub category: String,
    pub quantity: i64,
    pub minimum_stock: i64,
    #[serde(default)]
    pub supplier_id: Option<i64>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StockItemPayload {
    pub facility_id: i64,
    pub name: String,
    pub unit: String,
    pub category: String,
    pub minimum_stock: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier_id: Option<i64>,
}

/// One stock-in or stock-out entry for an item.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct StockMovement {
    pub id: i64,
    pub item_id: i64,
    pub direction: String,
    pub quantity: i64,
    #[serde(default)]
    pub note: Option<String>,
    pub recorded_at: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MovementPayload {
    pub direction: String,
    pub quantity: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

pub async fn list_items<T: Transport>(
    api: &ApiClient<T>,
) -> Result<Envelope<Vec<StockItem>>, ApiError> {
    api.call(RequestDescriptor::get("/warehouse/items").authenticated())
        .await
}

pub async fn get_item<T: Transport>(
    api: &ApiClient<T>,
    id: i64,
) -> Result<Envelope<StockItem>, ApiError> {
    api.call(RequestDescriptor::get(format!("/warehouse/items/{id}")).authenticated())
        .await
}

pub async fn create_item<T: Transport>(
    api: &ApiClient<T>,
    payload: &StockItemPayload,
) -> Result<Envelope<StockItem>, ApiError> {
    api.call(
        RequestDescriptor::post("/warehouse/items")
            .with_json(payload)?
            .authenticated(),
    )
    .await
}

pub async fn update_item<T: Transport>(
    api: &ApiClient<T>,
    id: i64,
    payload: &StockItemPayload,
) -> Result<Envelope<StockItem>, ApiError> {
    api.call(
        RequestDescriptor::put(format!("/warehouse/items/{id}"))
            .with_json(payload)?
            .authenticated(),
    )
    .await
}

pub async fn delete_item<T: Transport>(
    api: &ApiClient<T>,
    id: i64,
) -> Result<Envelope<serde_json::Value>, ApiError> {
    api.call(RequestDescriptor::delete(format!("/warehouse/items/{id}")).authenticated())
        .await
}

/// Book a stock-in/stock-out against an item. The server owns the
/// resulting quantity; the client never computes it.
pub async fn record_movement<T: Transport>(
    api: &ApiClient<T>,
    item_id: i64,
    payload: &MovementPayload,
) -> Result<Envelope<StockMovement>, ApiError> {
    api.call(
        RequestDescriptor::post(format!("/warehouse/items/{item_id}/movements"))
            .with_json(payload)?
            .authenticated(),
    )
    .await
}

pub async fn list_movements<T: Transport>(
    api: &ApiClient<T>,
    item_id: i64,
) -> Result<Envelope<Vec<StockMovement>>, ApiError> {
    api.call(RequestDescriptor::get(format!("/warehouse/items/{item_id}/movements")).authenticated())
        .await
}
