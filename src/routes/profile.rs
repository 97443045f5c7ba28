use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use validator::Validate;

use crate::dto::user_dto::{CreateProfileRequest, UpdateProfileRequest};
use crate::AppState;

#[axum::debug_handler]
pub async fn get_profile(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> crate::error::Result<Response> {
    let profile = state.profile_service.get_profile(&email).await?;
    Ok(Json(profile).into_response())
}

#[axum::debug_handler]
pub async fn create_profile(
    State(state): State<AppState>,
    Json(req): Json<CreateProfileRequest>,
) -> crate::error::Result<Response> {
    req.validate()?;
    let profile = state.profile_service.create_profile(req).await?;
    tracing::info!("Profile created for {}", profile.email);
    Ok((StatusCode::CREATED, Json(profile)).into_response())
}

#[axum::debug_handler]
pub async fn update_profile(
    State(state): State<AppState>,
    Path(email): Path<String>,
    Json(req): Json<UpdateProfileRequest>,
) -> crate::error::Result<Response> {
    let profile = state.profile_service.update_profile(&email, req).await?;
    Ok(Json(profile).into_response())
}
