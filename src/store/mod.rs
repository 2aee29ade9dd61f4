pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::models::master_webhook_server::MasterWebhookServer;
use crate::models::producer::Producer;
use crate::models::request_details::{NewRequestDetails, RequestDetails};

/// Persistence seam for the service. Handlers and services only see this
/// trait, so tests can swap [`PgStore`] for [`MemoryStore`].
#[async_trait]
pub trait WebhookStore: Send + Sync {
    /// First row of the master config table, if any.
    async fn master_webhook_server(&self) -> Result<Option<MasterWebhookServer>>;

    /// Case-insensitive exact match on the producer URL.
    async fn find_producer_by_url(&self, url: &str) -> Result<Option<Producer>>;

    /// Inserts a producer. Returns `None` when a concurrent registration for
    /// the same (case-insensitive) URL already holds the row.
    async fn insert_producer(
        &self,
        url: &str,
        last_accessed: DateTime<Utc>,
    ) -> Result<Option<Producer>>;

    async fn insert_request(&self, new: NewRequestDetails) -> Result<RequestDetails>;

    async fn request_by_id(&self, id: i64) -> Result<Option<RequestDetails>>;

    async fn list_requests(&self, producer_id: Option<i64>) -> Result<Vec<RequestDetails>>;

    /// Deletes one producer's request records strictly older than `cutoff`
    /// and returns the number of rows removed.
    async fn delete_requests_before(
        &self,
        producer_id: i64,
        cutoff: DateTime<Utc>,
    ) -> Result<u64>;
}
