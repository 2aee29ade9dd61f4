use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use sqlx::FromRow;

/// One logged inbound webhook delivery. Immutable after insertion except for
/// bulk deletion during a retention purge. `producer_id` is not validated
/// against the producer table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct RequestDetails {
    pub id: i64,
    pub producer_id: i64,
    pub url: String,
    pub timestamp: DateTime<Utc>,
    pub http_method: String,
    pub headers: JsonValue,
    pub response_status: i32,
    pub response_time: f32,
}

/// Insert form of [`RequestDetails`], before an id is generated.
#[derive(Debug, Clone)]
pub struct NewRequestDetails {
    pub producer_id: i64,
    pub url: String,
    pub timestamp: DateTime<Utc>,
    pub http_method: String,
    pub headers: JsonValue,
    pub response_status: i32,
    pub response_time: f32,
}
