use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Pre-seeded singleton identifying this webhook server. A missing row is
/// reported as the zero value, not as an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct MasterWebhookServer {
    pub webhook_server_url: String,
}
