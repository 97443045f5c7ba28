use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use sqlx::FromRow;
use uuid::Uuid;

/// A user's latest attempt for one (subject, topic). The composite key is
/// unique; resubmission overwrites score, answers and attempted_at in place.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Attempt {
    pub id: Uuid,
    pub user_email: String,
    pub subject_name: String,
    pub topic_title: String,
    pub score: i32,
    pub answers: JsonValue,
    pub attempted_at: DateTime<Utc>,
}

/// One graded answer as stored in the attempt's `answers` array.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRecord {
    pub question: String,
    pub selected_answer: String,
    pub correct_answer: String,
}
