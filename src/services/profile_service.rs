use crate::dto::user_dto::{CreateProfileRequest, UpdateProfileRequest};
use crate::error::{Error, Result};
use crate::models::profile::{Profile, ROLE_ADMIN, ROLE_SUPERADMIN, ROLE_USER};
use sqlx::PgPool;

#[derive(Clone)]
pub struct ProfileService {
    pool: PgPool,
}

impl ProfileService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn get_profile(&self, email: &str) -> Result<Profile> {
        let profile = sqlx::query_as::<_, Profile>(r#"SELECT * FROM profiles WHERE email = $1"#)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::NotFound("Profile not found".to_string()))?;
        Ok(profile)
    }

    pub async fn create_profile(&self, payload: CreateProfileRequest) -> Result<Profile> {
        let result = sqlx::query_as::<_, Profile>(
            r#"
            INSERT INTO profiles (email, name, avatar, bio)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&payload.email)
        .bind(&payload.name)
        .bind(&payload.avatar)
        .bind(&payload.bio)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(profile) => Ok(profile),
            Err(e)
                if e.as_database_error()
                    .map(|d| d.is_unique_violation())
                    .unwrap_or(false) =>
            {
                Err(Error::Conflict(format!(
                    "Profile for '{}' already exists",
                    payload.email
                )))
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn update_profile(
        &self,
        email: &str,
        payload: UpdateProfileRequest,
    ) -> Result<Profile> {
        let profile = sqlx::query_as::<_, Profile>(
            r#"
            UPDATE profiles
            SET
                name = COALESCE($2, name),
                avatar = COALESCE($3, avatar),
                bio = COALESCE($4, bio),
                updated_at = NOW()
            WHERE email = $1
            RETURNING *
            "#,
        )
        .bind(email)
        .bind(&payload.name)
        .bind(&payload.avatar)
        .bind(&payload.bio)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::NotFound("Profile not found".to_string()))?;
        Ok(profile)
    }

    pub async fn list_users(&self) -> Result<Vec<Profile>> {
        let users =
            sqlx::query_as::<_, Profile>(r#"SELECT * FROM profiles ORDER BY created_at ASC"#)
                .fetch_all(&self.pool)
                .await?;
        Ok(users)
    }

    /// user -> admin. Promoting an admin is a no-op; superadmins are never
    /// touched through this path.
    pub async fn promote(&self, email: &str) -> Result<Profile> {
        self.set_role(email, ROLE_ADMIN).await
    }

    /// admin -> user. Demoting a plain user is a no-op.
    pub async fn demote(&self, email: &str) -> Result<Profile> {
        self.set_role(email, ROLE_USER).await
    }

    async fn set_role(&self, email: &str, role: &str) -> Result<Profile> {
        let profile = self.get_profile(email).await?;
        if profile.role == ROLE_SUPERADMIN {
            return Err(Error::BadRequest(
                "Superadmin role cannot be changed".to_string(),
            ));
        }
        if profile.role == role {
            return Ok(profile);
        }

        let updated = sqlx::query_as::<_, Profile>(
            r#"
            UPDATE profiles
            SET role = $2, updated_at = NOW()
            WHERE email = $1
            RETURNING *
            "#,
        )
        .bind(email)
        .bind(role)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!("Role for {} changed to {}", email, role);
        Ok(updated)
    }
}
