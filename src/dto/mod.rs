pub mod producer_dto;
pub mod request_dto;
