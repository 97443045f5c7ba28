use crate::dto::subject_dto::{CreateSubjectRequest, UpdateSubjectRequest};
use crate::error::{Error, Result};
use crate::models::subject::Subject;
use sqlx::PgPool;

#[derive(Clone)]
pub struct SubjectService {
    pool: PgPool,
}

impl SubjectService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_names(&self) -> Result<Vec<String>> {
        let names = sqlx::query_scalar::<_, String>(r#"SELECT name FROM subjects ORDER BY name"#)
            .fetch_all(&self.pool)
            .await?;
        Ok(names)
    }

    pub async fn list_all(&self) -> Result<Vec<Subject>> {
        let subjects = sqlx::query_as::<_, Subject>(r#"SELECT * FROM subjects ORDER BY name"#)
            .fetch_all(&self.pool)
            .await?;
        Ok(subjects)
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Subject> {
        let subject = sqlx::query_as::<_, Subject>(r#"SELECT * FROM subjects WHERE name = $1"#)
            .bind(name)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::NotFound("Subject not found".to_string()))?;
        Ok(subject)
    }

    pub async fn create(&self, payload: CreateSubjectRequest) -> Result<Subject> {
        let introduction = serde_json::to_value(&payload.introduction)?;
        let topics = serde_json::to_value(&payload.topics)?;

        let result = sqlx::query_as::<_, Subject>(
            r#"
            INSERT INTO subjects (name, introduction, topics)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(&payload.name)
        .bind(introduction)
        .bind(topics)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(subject) => Ok(subject),
            Err(e) if is_unique_violation(&e) => Err(Error::Conflict(format!(
                "Subject '{}' already exists",
                payload.name
            ))),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn update(&self, name: &str, payload: UpdateSubjectRequest) -> Result<Subject> {
        let introduction = payload
            .introduction
            .map(|i| serde_json::to_value(i))
            .transpose()?;
        let topics = payload.topics.map(|t| serde_json::to_value(t)).transpose()?;

        let subject = sqlx::query_as::<_, Subject>(
            r#"
            UPDATE subjects
            SET
                introduction = COALESCE($2, introduction),
                topics = COALESCE($3, topics),
                updated_at = NOW()
            WHERE name = $1
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(introduction)
        .bind(topics)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::NotFound("Subject not found".to_string()))?;
        Ok(subject)
    }

    pub async fn delete(&self, name: &str) -> Result<()> {
        let result = sqlx::query(r#"DELETE FROM subjects WHERE name = $1"#)
            .bind(name)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound("Subject not found".to_string()));
        }
        Ok(())
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .map(|e| e.is_unique_violation())
        .unwrap_or(false)
}
