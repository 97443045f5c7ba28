use crate::error::Result;
use crate::models::quiz::{Question, Quiz};
use sqlx::PgPool;
use std::collections::HashMap;

#[derive(Clone)]
pub struct QuizService {
    pool: PgPool,
}

impl QuizService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn get_quiz(&self, subject_name: &str, topic_title: &str) -> Result<Quiz> {
        let quiz = sqlx::query_as::<_, Quiz>(
            r#"SELECT * FROM quizzes WHERE subject_name = $1 AND topic_title = $2"#,
        )
        .bind(subject_name)
        .bind(topic_title)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| {
            crate::error::Error::NotFound("No quiz found for this topic".to_string())
        })?;
        Ok(quiz)
    }

    /// Full-replace upsert: the question array is always written wholesale,
    /// never patched. At most one quiz per (subject, topic).
    pub async fn put_quiz(
        &self,
        subject_name: &str,
        topic_title: &str,
        questions: &[Question],
    ) -> Result<Quiz> {
        for question in questions {
            question.validate()?;
        }
        let questions_json = serde_json::to_value(questions)?;

        let quiz = sqlx::query_as::<_, Quiz>(
            r#"
            INSERT INTO quizzes (subject_name, topic_title, questions)
            VALUES ($1, $2, $3)
            ON CONFLICT (subject_name, topic_title)
            DO UPDATE SET questions = EXCLUDED.questions, updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(subject_name)
        .bind(topic_title)
        .bind(questions_json)
        .fetch_one(&self.pool)
        .await?;

        Ok(quiz)
    }

    /// Question-count denominators for one subject, keyed by topic title.
    pub async fn topic_totals(&self, subject_name: &str) -> Result<HashMap<String, i64>> {
        let quizzes =
            sqlx::query_as::<_, Quiz>(r#"SELECT * FROM quizzes WHERE subject_name = $1"#)
                .bind(subject_name)
                .fetch_all(&self.pool)
                .await?;

        let mut totals = HashMap::new();
        for quiz in quizzes {
            let count = quiz.questions.as_array().map(|a| a.len()).unwrap_or(0) as i64;
            totals.insert(quiz.topic_title, count);
        }
        Ok(totals)
    }
}
