use std::sync::Arc;

use chrono::Utc;

use crate::error::{Error, Result};
use crate::models::request_details::{NewRequestDetails, RequestDetails};
use crate::store::WebhookStore;

#[derive(Clone)]
pub struct RequestService {
    store: Arc<dyn WebhookStore>,
}

impl RequestService {
    pub fn new(store: Arc<dyn WebhookStore>) -> Self {
        Self { store }
    }

    pub async fn log(&self, new: NewRequestDetails) -> Result<RequestDetails> {
        self.store.insert_request(new).await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<RequestDetails> {
        self.store
            .request_by_id(id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Request record {} not found", id)))
    }

    pub async fn list(&self, producer_id: Option<i64>) -> Result<Vec<RequestDetails>> {
        self.store.list_requests(producer_id).await
    }

    /// Deletes the producer's request records strictly older than
    /// now minus `days_to_keep` days. Returns the deleted row count.
    pub async fn purge(&self, producer_id: i64, days_to_keep: i64) -> Result<u64> {
        if days_to_keep < 0 {
            return Err(Error::BadRequest(
                "DaysToKeep must be non-negative".to_string(),
            ));
        }
        let span = chrono::Duration::try_days(days_to_keep)
            .ok_or_else(|| Error::BadRequest("DaysToKeep out of range".to_string()))?;
        let cutoff = Utc::now() - span;
        self.store.delete_requests_before(producer_id, cutoff).await
    }
}
