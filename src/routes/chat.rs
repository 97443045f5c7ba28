use axum::{
    extract::State,
    response::{IntoResponse, Json, Response},
};
use validator::Validate;

use crate::dto::chat_dto::{ChatRequest, ChatResponse};
use crate::AppState;

#[axum::debug_handler]
pub async fn chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> crate::error::Result<Response> {
    req.validate()?;
    let reply = state.chat_service.generate_reply(&req.message).await?;
    Ok(Json(ChatResponse { reply }).into_response())
}
