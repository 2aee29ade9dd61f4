use std::sync::Arc;

use crate::error::Result;
use crate::models::master_webhook_server::MasterWebhookServer;
use crate::store::WebhookStore;

#[derive(Clone)]
pub struct MasterService {
    store: Arc<dyn WebhookStore>,
}

impl MasterService {
    pub fn new(store: Arc<dyn WebhookStore>) -> Self {
        Self { store }
    }

    /// A missing config row degrades to the zero value instead of erroring.
    pub async fn get(&self) -> Result<MasterWebhookServer> {
        Ok(self
            .store
            .master_webhook_server()
            .await?
            .unwrap_or_default())
    }
}
