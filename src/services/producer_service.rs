use std::sync::Arc;

use chrono::Utc;

use crate::error::{Error, Result};
use crate::models::producer::Producer;
use crate::store::WebhookStore;

#[derive(Clone)]
pub struct ProducerService {
    store: Arc<dyn WebhookStore>,
}

impl ProducerService {
    pub fn new(store: Arc<dyn WebhookStore>) -> Self {
        Self { store }
    }

    /// Idempotent lookup-or-create keyed on the case-insensitive URL.
    /// `last_accessed` is set at creation time only; repeat registrations
    /// return the stored row untouched.
    pub async fn register(&self, url: &str) -> Result<(Producer, bool)> {
        if let Some(existing) = self.store.find_producer_by_url(url).await? {
            return Ok((existing, false));
        }

        if let Some(created) = self.store.insert_producer(url, Utc::now()).await? {
            return Ok((created, true));
        }

        // Lost the insert race; the winner's row must exist now.
        let existing = self
            .store
            .find_producer_by_url(url)
            .await?
            .ok_or_else(|| {
                Error::Internal("producer missing after conflicting insert".to_string())
            })?;
        Ok((existing, false))
    }
}
