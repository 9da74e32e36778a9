//! Administrative transaction log endpoints.
//!
//! The log is append-only from the console's point of view: entries are
//! recorded and listed, never edited.

use serde::{Deserialize, Serialize};

use crate::net::client::{ApiClient, RequestDescriptor};
use crate::net::error::ApiError;
use crate::net::transport::Transport;
use crate::net::types::Envelope;

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TransactionRecord {
    pub id: i64,
    pub facility_id: i64,
    pub actor: String,
    pub action: String,
    pub subject: String,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub note: Option<String>,
    pub recorded_at: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TransactionPayload {
    pub facility_id: i64,
    pub action: String,
    pub subject: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

pub async fn list<T: Transport>(
    api: &ApiClient<T>,
) -> Result<Envelope<Vec<TransactionRecord>>, ApiError> {
    api.call(RequestDescriptor::get("/transactions").authenticated())
        .await
}

pub async fn get<T: Transport>(
    api: &ApiClient<T>,
    id: i64,
) -> Result<Envelope<TransactionRecord>, ApiError> {
    api.call(RequestDescriptor::get(format!("/transactions/{id}")).authenticated())
        .await
}

pub async fn record<T: Transport>(
    api: &ApiClient<T>,
    payload: &TransactionPayload,
) -> Result<Envelope<TransactionRecord>, ApiError> {
    api.call(
        RequestDescriptor::post("/transactions")
            .with_json(payload)?
            .authenticated(),
    )
    .await
}
