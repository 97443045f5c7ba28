use crate::models::quiz::Question;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PutQuizRequest {
    #[validate(length(min = 1, message = "subjectName is required"))]
    pub subject_name: String,
    #[validate(length(min = 1, message = "topicTitle is required"))]
    pub topic_title: String,
    #[validate(length(min = 1, message = "at least one question is required"))]
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RecordAttemptRequest {
    #[validate(length(min = 1, message = "userEmail is required"))]
    pub user_email: String,
    #[validate(length(min = 1, message = "subjectName is required"))]
    pub subject_name: String,
    #[validate(length(min = 1, message = "topicTitle is required"))]
    pub topic_title: String,
    #[validate(range(min = 0, message = "score must not be negative"))]
    pub score: i32,
    #[serde(default)]
    pub answers: Vec<SubmittedAnswer>,
}

/// One answer as submitted by the quiz-taking client. The echoed
/// `correctAnswer` is accepted for wire compatibility but ignored; the
/// server regrades against the stored quiz.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedAnswer {
    pub question: String,
    #[serde(default)]
    pub selected_answer: String,
    #[serde(default)]
    pub correct_answer: Option<String>,
}
