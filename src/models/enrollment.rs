use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

pub const STATUS_UNFINISHED: &str = "unfinished";
pub const STATUS_FINISHED: &str = "finished";

/// A user's tracked relationship to a subject. At most one row per
/// (user_email, subject_name); status only ever moves unfinished -> finished.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CourseEnrollment {
    pub id: Uuid,
    pub user_email: String,
    pub subject_name: String,
    pub status: String,
    pub added_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
}
