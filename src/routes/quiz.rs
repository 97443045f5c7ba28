use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json, Response},
};
use validator::Validate;

use crate::dto::quiz_dto::{PutQuizRequest, RecordAttemptRequest};
use crate::services::grading_service::GradingService;
use crate::AppState;

#[axum::debug_handler]
pub async fn get_quiz(
    State(state): State<AppState>,
    Path((subject_name, topic_title)): Path<(String, String)>,
) -> crate::error::Result<Response> {
    let quiz = state
        .quiz_service
        .get_quiz(&subject_name, &topic_title)
        .await?;
    Ok(Json(quiz).into_response())
}

/// Quiz authoring: wholesale replacement of the question set for one
/// (subject, topic). Admin only.
#[axum::debug_handler]
pub async fn put_quiz(
    State(state): State<AppState>,
    Json(req): Json<PutQuizRequest>,
) -> crate::error::Result<Response> {
    req.validate()?;
    let quiz = state
        .quiz_service
        .put_quiz(&req.subject_name, &req.topic_title, &req.questions)
        .await?;
    tracing::info!(
        "Quiz saved for {} / {} ({} questions)",
        quiz.subject_name,
        quiz.topic_title,
        req.questions.len()
    );
    Ok(Json(quiz).into_response())
}

/// Records (or overwrites) the caller's attempt for one topic. The server
/// regrades against the stored quiz; the client-sent score is advisory.
#[axum::debug_handler]
pub async fn submit_quiz(
    State(state): State<AppState>,
    Json(req): Json<RecordAttemptRequest>,
) -> crate::error::Result<Response> {
    req.validate()?;

    let quiz = state
        .quiz_service
        .get_quiz(&req.subject_name, &req.topic_title)
        .await?;
    let questions = quiz.parsed_questions();

    let (score, records) = GradingService::grade(&questions, &req.answers);
    if score != req.score {
        tracing::warn!(
            "Client-reported score {} disagrees with regraded score {} for {} on {} / {}",
            req.score,
            score,
            req.user_email,
            req.subject_name,
            req.topic_title
        );
    }

    let attempt = state
        .attempt_service
        .upsert_attempt(
            &req.user_email,
            &req.subject_name,
            &req.topic_title,
            score,
            &records,
        )
        .await?;

    tracing::info!(
        "Attempt recorded: {} scored {}/{} on {} / {}",
        attempt.user_email,
        attempt.score,
        questions.len(),
        attempt.subject_name,
        attempt.topic_title
    );
    Ok(Json(attempt).into_response())
}

#[axum::debug_handler]
pub async fn get_attempt(
    State(state): State<AppState>,
    Path((user_email, subject_name, topic_title)): Path<(String, String, String)>,
) -> crate::error::Result<Response> {
    let attempt = state
        .attempt_service
        .get_attempt(&user_email, &subject_name, &topic_title)
        .await?;
    Ok(Json(attempt).into_response())
}

#[axum::debug_handler]
pub async fn list_attempts(
    State(state): State<AppState>,
    Path((user_email, subject_name)): Path<(String, String)>,
) -> crate::error::Result<Response> {
    let attempts = state
        .attempt_service
        .list_attempts(&user_email, &subject_name)
        .await?;
    Ok(Json(attempts).into_response())
}
