use axum::{extract::State, response::IntoResponse, Json};

use crate::{error::Result, AppState};

#[axum::debug_handler]
pub async fn get_master_webhook_server(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let server = state.master_service.get().await?;
    Ok(Json(server))
}
