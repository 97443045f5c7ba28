use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json, Response},
};
use validator::Validate;

use crate::dto::course_dto::{AddCourseRequest, CourseListResponse, FinishCourseRequest};
use crate::AppState;

#[axum::debug_handler]
pub async fn list_courses(
    State(state): State<AppState>,
    Path(user_email): Path<String>,
) -> crate::error::Result<Response> {
    let courses = state.enrollment_service.list_courses(&user_email).await?;
    Ok(Json(CourseListResponse { courses }).into_response())
}

#[axum::debug_handler]
pub async fn add_course(
    State(state): State<AppState>,
    Json(req): Json<AddCourseRequest>,
) -> crate::error::Result<Response> {
    req.validate()?;
    // The subject must exist before it can be tracked.
    state.subject_service.get_by_name(&req.subject_name).await?;
    let enrollment = state
        .enrollment_service
        .add_course(&req.user_email, &req.subject_name)
        .await?;
    Ok(Json(enrollment).into_response())
}

#[axum::debug_handler]
pub async fn finish_course(
    State(state): State<AppState>,
    Json(req): Json<FinishCourseRequest>,
) -> crate::error::Result<Response> {
    req.validate()?;
    let enrollment = state
        .enrollment_service
        .finish_course(&req.user_email, &req.subject_name)
        .await?;
    tracing::info!(
        "Course finished: {} / {}",
        enrollment.user_email,
        enrollment.subject_name
    );
    Ok(Json(enrollment).into_response())
}
