use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};

use crate::{
    dto::request_dto::{LogRequestPayload, PurgeParams, RequestListQuery},
    error::Result,
    utils::headers::extract_header_json_data,
    AppState,
};

#[axum::debug_handler]
pub async fn log_request(
    State(state): State<AppState>,
    Json(payload): Json<LogRequestPayload>,
) -> Result<impl IntoResponse> {
    let record = state.request_service.log(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

#[axum::debug_handler]
pub async fn list_requests(
    State(state): State<AppState>,
    Query(query): Query<RequestListQuery>,
) -> Result<impl IntoResponse> {
    let records = state.request_service.list(query.producer_id).await?;
    Ok(Json(records))
}

/// Returns the stored header blob normalized through the header decoder.
#[axum::debug_handler]
pub async fn get_request_headers(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let record = state.request_service.get_by_id(id).await?;
    let blob = serde_json::to_vec(&record.headers)?;
    let headers = extract_header_json_data(&blob)?;
    Ok(Json(headers))
}

/// Body is `true` when at least one record was deleted, `false` for a no-op.
#[axum::debug_handler]
pub async fn purge_request_records(
    State(state): State<AppState>,
    Query(params): Query<PurgeParams>,
) -> Result<impl IntoResponse> {
    let deleted = state
        .request_service
        .purge(params.producer_id, params.days_to_keep)
        .await?;
    Ok(Json(deleted > 0))
}
