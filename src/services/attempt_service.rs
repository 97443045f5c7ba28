use crate::error::Result;
use crate::models::attempt::{AnswerRecord, Attempt};
use sqlx::PgPool;

#[derive(Clone)]
pub struct AttemptService {
    pool: PgPool,
}

impl AttemptService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Records the attempt for (user, subject, topic) in one statement.
    /// First submission inserts; resubmission replaces score, answers and
    /// attempted_at in place. Concurrent submissions for the same key
    /// serialize at the store, last writer wins, answer arrays are never
    /// merged.
    pub async fn upsert_attempt(
        &self,
        user_email: &str,
        subject_name: &str,
        topic_title: &str,
        score: i32,
        answers: &[AnswerRecord],
    ) -> Result<Attempt> {
        let answers_json = serde_json::to_value(answers)?;

        let attempt = sqlx::query_as::<_, Attempt>(
            r#"
            INSERT INTO quiz_attempts (user_email, subject_name, topic_title, score, answers, attempted_at)
            VALUES ($1, $2, $3, $4, $5, NOW())
            ON CONFLICT (user_email, subject_name, topic_title)
            DO UPDATE SET
                score = EXCLUDED.score,
                answers = EXCLUDED.answers,
                attempted_at = EXCLUDED.attempted_at
            RETURNING *
            "#,
        )
        .bind(user_email)
        .bind(subject_name)
        .bind(topic_title)
        .bind(score)
        .bind(answers_json)
        .fetch_one(&self.pool)
        .await?;

        Ok(attempt)
    }

    pub async fn get_attempt(
        &self,
        user_email: &str,
        subject_name: &str,
        topic_title: &str,
    ) -> Result<Attempt> {
        let attempt = sqlx::query_as::<_, Attempt>(
            r#"
            SELECT * FROM quiz_attempts
            WHERE user_email = $1 AND subject_name = $2 AND topic_title = $3
            "#,
        )
        .bind(user_email)
        .bind(subject_name)
        .bind(topic_title)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| {
            crate::error::Error::NotFound("No attempt recorded for this topic".to_string())
        })?;
        Ok(attempt)
    }

    /// All attempts within one subject. Empty is a valid result, not an error.
    pub async fn list_attempts(
        &self,
        user_email: &str,
        subject_name: &str,
    ) -> Result<Vec<Attempt>> {
        let attempts = sqlx::query_as::<_, Attempt>(
            r#"
            SELECT * FROM quiz_attempts
            WHERE user_email = $1 AND subject_name = $2
            ORDER BY attempted_at ASC
            "#,
        )
        .bind(user_email)
        .bind(subject_name)
        .fetch_all(&self.pool)
        .await?;

        Ok(attempts)
    }
}
