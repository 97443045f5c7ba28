use axum::{
    extract::State,
    response::{IntoResponse, Json, Response},
};
use validator::Validate;

use crate::dto::user_dto::RoleChangeRequest;
use crate::AppState;

#[axum::debug_handler]
pub async fn list_users(State(state): State<AppState>) -> crate::error::Result<Response> {
    let users = state.profile_service.list_users().await?;
    Ok(Json(users).into_response())
}

#[axum::debug_handler]
pub async fn promote(
    State(state): State<AppState>,
    Json(req): Json<RoleChangeRequest>,
) -> crate::error::Result<Response> {
    req.validate()?;
    let profile = state.profile_service.promote(&req.email).await?;
    Ok(Json(profile).into_response())
}

#[axum::debug_handler]
pub async fn demote(
    State(state): State<AppState>,
    Json(req): Json<RoleChangeRequest>,
) -> crate::error::Result<Response> {
    req.validate()?;
    let profile = state.profile_service.demote(&req.email).await?;
    Ok(Json(profile).into_response())
}
