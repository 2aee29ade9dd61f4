pub mod master_service;
pub mod producer_service;
pub mod request_service;
