use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Json, Response},
};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::AppState;

/// Claims of the bearer token issued by the external identity provider.
/// Roles are NOT carried in the token; they live with the profile record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
    pub email: Option<String>,
}

impl Claims {
    /// The verified address identifying the caller. Providers that put the
    /// email in a dedicated claim win over `sub`.
    pub fn identity_email(&self) -> &str {
        self.email.as_deref().unwrap_or(&self.sub)
    }
}

fn decode_claims(req: &Request) -> std::result::Result<Claims, Response> {
    let Some(auth_header) = req.headers().get(axum::http::header::AUTHORIZATION) else {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(json!({"error":"missing_authorization"})),
        )
            .into_response());
    };
    let Ok(auth_str) = auth_header.to_str() else {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(json!({"error":"bad_authorization"})),
        )
            .into_response());
    };
    let Some(token) = auth_str.strip_prefix("Bearer ") else {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(json!({"error":"unsupported_scheme"})),
        )
            .into_response());
    };

    let config = crate::config::get_config();
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    match decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret.as_bytes()),
        &validation,
    ) {
        Ok(data) => Ok(data.claims),
        Err(_) => Err((
            StatusCode::UNAUTHORIZED,
            Json(json!({"error":"invalid_token"})),
        )
            .into_response()),
    }
}

pub async fn require_admin(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    let claims = match decode_claims(&req) {
        Ok(claims) => claims,
        Err(resp) => return resp,
    };

    match state
        .profile_service
        .get_profile(claims.identity_email())
        .await
    {
        Ok(profile) if profile.is_admin() => {
            req.extensions_mut().insert(claims);
            next.run(req).await
        }
        _ => (StatusCode::FORBIDDEN, Json(json!({"error":"forbidden"}))).into_response(),
    }
}

pub async fn require_superadmin(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    let claims = match decode_claims(&req) {
        Ok(claims) => claims,
        Err(resp) => return resp,
    };

    match state
        .profile_service
        .get_profile(claims.identity_email())
        .await
    {
        Ok(profile) if profile.is_superadmin() => {
            req.extensions_mut().insert(claims);
            next.run(req).await
        }
        _ => (StatusCode::FORBIDDEN, Json(json!({"error":"forbidden"}))).into_response(),
    }
}
