use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};

use crate::{
    dto::producer_dto::RegisterProducerPayload,
    error::{Error, Result},
    AppState,
};

#[axum::debug_handler]
pub async fn register_producer(
    State(state): State<AppState>,
    Json(payload): Json<RegisterProducerPayload>,
) -> Result<impl IntoResponse> {
    if payload.url.trim().is_empty() {
        return Err(Error::BadRequest("url must not be empty".to_string()));
    }

    let (producer, created) = state.producer_service.register(&payload.url).await?;
    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(producer)))
}
