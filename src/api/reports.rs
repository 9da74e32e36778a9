//! Incident report endpoints.

use serde::{Deserialize, Serialize};

use crate::net::client::{ApiClient, RequestDescriptor};
use crate::net::error::ApiError;
use crate::net::transport::Transport;
use crate::net::types::Envelope;

/// An incident report as the server returns it.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Report {
    pub id: i64,
    pub facility_id: i64,
    pub title: String,
    pub category: String,
    pub description: String,
    pub status: String,
    pub reported_by: String,
    pub occurred_on: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Fields a report is created or updated from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ReportPayload {
    pub facility_id: i64,
    pub title: String,
    pub category: String,
    pub description: String,
    pub occurred_on: String,
}

pub async fn list<T: Transport>(api: &ApiClient<T>) -> Result<Envelope<Vec<Report>>, ApiError> {
    api.call(RequestDescriptor::get("/reports").authenticated())
        .await
}

pub async fn get<T: Transport>(
    api: &ApiClient<T>,
    id: i64,
) -> Result<Envelope<Report>, ApiError> {
    api.call(RequestDescriptor::get(format!("/reports/{id}")).authenticated())
        .await
}

pub async fn create<T: Transport>(
    api: &ApiClient<T>,
    payload: &ReportPayload,
) -> Result<Envelope<Report>, ApiError> {
    api.call(
        RequestDescriptor::post("/reports")
            .with_json(payload)?
            .authenticated(),
    )
    .await
}

pub async fn update<T: Transport>(
    api: &ApiClient<T>,
    id: i64,
    payload: &ReportPayload,
) -> Result<Envelope<Report>, ApiError> {
    api.call(
        RequestDescriptor::put(format!("/reports/{id}"))
            .with_json(payload)?
            .authenticated(),
    )
    .await
}

/// Move a report through its workflow (`open`, `in_review`, `closed`...).
pub async fn update_status<T: Transport>(
    api: &ApiClient<T>,
    id: i64,
    status: &str,
) -> Result<Envelope<Report>, ApiError> {
    api.call(
        RequestDescriptor::put(format!("/reports/{id}/status"))
            .with_json(&serde_json::json!({ "status": status }))?
            .authenticated(),
    )
    .await
}

pub async fn delete<T: Transport>(
    api: &ApiClient<T>,
    id: i64,
) -> Result<Envelope<serde_json::Value>, ApiError> {
    api.call(RequestDescriptor::delete(format!("/reports/{id}")).authenticated())
        .await
}
