pub mod health;
pub mod master;
pub mod producer;
pub mod request;
