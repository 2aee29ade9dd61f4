use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

use crate::error::Result;
use crate::models::master_webhook_server::MasterWebhookServer;
use crate::models::producer::Producer;
use crate::models::request_details::{NewRequestDetails, RequestDetails};
use crate::store::WebhookStore;

#[derive(Default)]
struct Inner {
    master: Option<MasterWebhookServer>,
    producers: Vec<Producer>,
    requests: Vec<RequestDetails>,
    next_producer_id: i64,
    next_request_id: i64,
}

/// In-memory store mirroring the Postgres semantics, including the
/// case-insensitive producer uniqueness. Used by the HTTP tests.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store with the master config row pre-seeded, as it is in production.
    pub fn with_master(url: &str) -> Self {
        Self {
            inner: Mutex::new(Inner {
                master: Some(MasterWebhookServer {
                    webhook_server_url: url.to_string(),
                }),
                ..Inner::default()
            }),
        }
    }
}

#[async_trait]
impl WebhookStore for MemoryStore {
    async fn master_webhook_server(&self) -> Result<Option<MasterWebhookServer>> {
        Ok(self.inner.lock().await.master.clone())
    }

    async fn find_producer_by_url(&self, url: &str) -> Result<Option<Producer>> {
        let inner = self.inner.lock().await;
        Ok(inner
            .producers
            .iter()
            .find(|p| p.url.eq_ignore_ascii_case(url))
            .cloned())
    }

    async fn insert_producer(
        &self,
        url: &str,
        last_accessed: DateTime<Utc>,
    ) -> Result<Option<Producer>> {
        let mut inner = self.inner.lock().await;
        if inner.producers.iter().any(|p| p.url.eq_ignore_ascii_case(url)) {
            return Ok(None);
        }
        inner.next_producer_id += 1;
        let producer = Producer {
            id: inner.next_producer_id,
            url: url.to_string(),
            last_accessed,
        };
        inner.producers.push(producer.clone());
        Ok(Some(producer))
    }

    async fn insert_request(&self, new: NewRequestDetails) -> Result<RequestDetails> {
        let mut inner = self.inner.lock().await;
        inner.next_request_id += 1;
        let record = RequestDetails {
            id: inner.next_request_id,
            producer_id: new.producer_id,
            url: new.url,
            timestamp: new.timestamp,
            http_method: new.http_method,
            headers: new.headers,
            response_status: new.response_status,
            response_time: new.response_time,
        };
        inner.requests.push(record.clone());
        Ok(record)
    }

    async fn request_by_id(&self, id: i64) -> Result<Option<RequestDetails>> {
        let inner = self.inner.lock().await;
        Ok(inner.requests.iter().find(|r| r.id == id).cloned())
    }

    async fn list_requests(&self, producer_id: Option<i64>) -> Result<Vec<RequestDetails>> {
        let inner = self.inner.lock().await;
        Ok(inner
            .requests
            .iter()
            .filter(|r| producer_id.map_or(true, |id| r.producer_id == id))
            .cloned()
            .collect())
    }

    async fn delete_requests_before(
        &self,
        producer_id: i64,
        cutoff: DateTime<Utc>,
    ) -> Result<u64> {
        let mut inner = self.inner.lock().await;
        let before = inner.requests.len();
        inner
            .requests
            .retain(|r| r.producer_id != producer_id || r.timestamp >= cutoff);
        Ok((before - inner.requests.len()) as u64)
    }
}
