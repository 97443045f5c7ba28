use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use validator::Validate;

use crate::dto::subject_dto::{CreateSubjectRequest, SubjectName, UpdateSubjectRequest};
use crate::AppState;

#[axum::debug_handler]
pub async fn list_subjects(State(state): State<AppState>) -> crate::error::Result<Response> {
    let names = state.subject_service.list_names().await?;
    let subjects: Vec<SubjectName> = names.into_iter().map(|name| SubjectName { name }).collect();
    Ok(Json(subjects).into_response())
}

#[axum::debug_handler]
pub async fn get_subject(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> crate::error::Result<Response> {
    let subject = state.subject_service.get_by_name(&name).await?;
    Ok(Json(subject).into_response())
}

#[axum::debug_handler]
pub async fn list_all_subjects(State(state): State<AppState>) -> crate::error::Result<Response> {
    let subjects = state.subject_service.list_all().await?;
    Ok(Json(subjects).into_response())
}

#[axum::debug_handler]
pub async fn create_subject(
    State(state): State<AppState>,
    Json(req): Json<CreateSubjectRequest>,
) -> crate::error::Result<Response> {
    req.validate()?;
    let subject = state.subject_service.create(req).await?;
    tracing::info!("Subject created: {}", subject.name);
    Ok((StatusCode::CREATED, Json(subject)).into_response())
}

#[axum::debug_handler]
pub async fn update_subject(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(req): Json<UpdateSubjectRequest>,
) -> crate::error::Result<Response> {
    let subject = state.subject_service.update(&name, req).await?;
    tracing::info!("Subject updated: {}", subject.name);
    Ok(Json(subject).into_response())
}

#[axum::debug_handler]
pub async fn delete_subject(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> crate::error::Result<Response> {
    state.subject_service.delete(&name).await?;
    tracing::info!("Subject deleted: {}", name);
    Ok(Json(json!({ "deleted": true })).into_response())
}
