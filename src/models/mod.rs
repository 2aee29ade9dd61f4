pub mod master_webhook_server;
pub mod producer;
pub mod request_details;
