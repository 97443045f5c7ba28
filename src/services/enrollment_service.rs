use crate::error::Result;
use crate::models::enrollment::{CourseEnrollment, STATUS_FINISHED, STATUS_UNFINISHED};
use sqlx::PgPool;

#[derive(Clone)]
pub struct EnrollmentService {
    pool: PgPool,
}

impl EnrollmentService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_courses(&self, user_email: &str) -> Result<Vec<CourseEnrollment>> {
        let courses = sqlx::query_as::<_, CourseEnrollment>(
            r#"SELECT * FROM course_enrollments WHERE user_email = $1 ORDER BY added_at ASC"#,
        )
        .bind(user_email)
        .fetch_all(&self.pool)
        .await?;
        Ok(courses)
    }

    /// Adds the subject to the user's course list. Adding a subject that is
    /// already on the list is a no-op returning the existing entry.
    pub async fn add_course(
        &self,
        user_email: &str,
        subject_name: &str,
    ) -> Result<CourseEnrollment> {
        let inserted = sqlx::query_as::<_, CourseEnrollment>(
            r#"
            INSERT INTO course_enrollments (user_email, subject_name, status)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_email, subject_name) DO NOTHING
            RETURNING *
            "#,
        )
        .bind(user_email)
        .bind(subject_name)
        .bind(STATUS_UNFINISHED)
        .fetch_optional(&self.pool)
        .await?;

        if let Some(enrollment) = inserted {
            return Ok(enrollment);
        }

        let existing = sqlx::query_as::<_, CourseEnrollment>(
            r#"SELECT * FROM course_enrollments WHERE user_email = $1 AND subject_name = $2"#,
        )
        .bind(user_email)
        .bind(subject_name)
        .fetch_one(&self.pool)
        .await?;
        Ok(existing)
    }

    /// Moves the enrollment to finished. Finishing an already-finished
    /// course leaves status and finished_at untouched.
    pub async fn finish_course(
        &self,
        user_email: &str,
        subject_name: &str,
    ) -> Result<CourseEnrollment> {
        let enrollment = sqlx::query_as::<_, CourseEnrollment>(
            r#"
            UPDATE course_enrollments
            SET status = $3, finished_at = COALESCE(finished_at, NOW())
            WHERE user_email = $1 AND subject_name = $2
            RETURNING *
            "#,
        )
        .bind(user_email)
        .bind(subject_name)
        .bind(STATUS_FINISHED)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| {
            crate::error::Error::NotFound("No such course on the user's list".to_string())
        })?;
        Ok(enrollment)
    }

    /// Subjects eligible for the global performance overview.
    pub async fn list_finished_subjects(&self, user_email: &str) -> Result<Vec<String>> {
        let subjects = sqlx::query_scalar::<_, String>(
            r#"
            SELECT subject_name FROM course_enrollments
            WHERE user_email = $1 AND status = $2
            ORDER BY added_at ASC
            "#,
        )
        .bind(user_email)
        .bind(STATUS_FINISHED)
        .fetch_all(&self.pool)
        .await?;
        Ok(subjects)
    }
}
