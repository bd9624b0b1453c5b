use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::{Cookie, SameSite};
use axum_extra::extract::CookieJar;
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::db;
use crate::error::AppError;
use crate::state::SharedState;

pub const SESSION_COOKIE: &str = "vetflow_session";

/// Generate a random 32-byte token, hex-encoded. Used for both session
/// cookies and password-reset tokens.
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::random();
    hex::encode(bytes)
}

/// SHA-256 of a token, hex-encoded. Only hashes are stored at rest.
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

pub fn session_cookie(token: &str, ttl_hours: i64) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token.to_string()))
        .path("/")
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::hours(ttl_hours))
        .build()
}

pub fn clear_session_cookie() -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, ""))
        .path("/")
        .max_age(time::Duration::ZERO)
        .build()
}

/// The authenticated principal: just the recruiter id, resolved from the
/// session cookie against the sessions table. Handlers re-fetch the
/// recruiter row when they need more than the id.
#[derive(Debug, Clone, Copy)]
pub struct AuthRecruiter {
    pub recruiter_id: Uuid,
}

impl FromRequestParts<SharedState> for AuthRecruiter {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &SharedState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar
            .get(SESSION_COOKIE)
            .map(|c| c.value().to_string())
            .ok_or_else(|| AppError::Unauthorized("Missing session".to_string()))?;

        let session = db::sessions::find_valid_by_hash(&state.pool, &hash_token(&token))
            .await?
            .ok_or_else(|| AppError::Unauthorized("Invalid or expired session".to_string()))?;

        Ok(AuthRecruiter {
            recruiter_id: session.recruiter_id,
        })
    }
}
