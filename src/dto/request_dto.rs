use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value as JsonValue;

use crate::models::request_details::NewRequestDetails;

/// Delivery record as posted to `/request`. The `headers` field stays
/// untyped so the whole body binds in a single parse; whatever JSON shape
/// the producer sent is persisted verbatim.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogRequestPayload {
    pub producer_id: i64,
    pub url: String,
    pub timestamp: DateTime<Utc>,
    pub http_method: String,
    pub headers: JsonValue,
    pub response_status: i32,
    pub response_time: f32,
}

impl From<LogRequestPayload> for NewRequestDetails {
    fn from(payload: LogRequestPayload) -> Self {
        Self {
            producer_id: payload.producer_id,
            url: payload.url,
            timestamp: payload.timestamp,
            http_method: payload.http_method,
            headers: payload.headers,
            response_status: payload.response_status,
            response_time: payload.response_time,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RequestListQuery {
    #[serde(rename = "ProducerId")]
    pub producer_id: Option<i64>,
}

/// Query parameters of `DELETE /purge`. Non-integer values are rejected by
/// the extractor before any delete runs.
#[derive(Debug, Clone, Deserialize)]
pub struct PurgeParams {
    #[serde(rename = "DaysToKeep")]
    pub days_to_keep: i64,
    #[serde(rename = "ProducerId")]
    pub producer_id: i64,
}
