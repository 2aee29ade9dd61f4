use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A registered webhook source, unique per case-insensitive URL.
/// `last_accessed` is set once at registration time.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Producer {
    pub id: i64,
    pub url: String,
    pub last_accessed: DateTime<Utc>,
}
