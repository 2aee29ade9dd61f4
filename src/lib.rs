pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;
pub mod utils;

use std::sync::Arc;

use crate::services::{
    master_service::MasterService, producer_service::ProducerService,
    request_service::RequestService,
};
use crate::store::WebhookStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn WebhookStore>,
    pub master_service: MasterService,
    pub producer_service: ProducerService,
    pub request_service: RequestService,
}

impl AppState {
    pub fn new(store: Arc<dyn WebhookStore>) -> Self {
        let master_service = MasterService::new(store.clone());
        let producer_service = ProducerService::new(store.clone());
        let request_service = RequestService::new(store.clone());

        Self {
            store,
            master_service,
            producer_service,
            request_service,
        }
    }
}
