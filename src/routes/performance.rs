use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json, Response},
};

use crate::AppState;

#[axum::debug_handler]
pub async fn subject_performance(
    State(state): State<AppState>,
    Path((user_email, subject_name)): Path<(String, String)>,
) -> crate::error::Result<Response> {
    let report = state
        .performance_service
        .subject_summary(&user_email, &subject_name)
        .await?;
    Ok(Json(report).into_response())
}

#[axum::debug_handler]
pub async fn performance_overview(
    State(state): State<AppState>,
    Path(user_email): Path<String>,
) -> crate::error::Result<Response> {
    let overview = state.performance_service.overview(&user_email).await?;
    Ok(Json(overview).into_response())
}
