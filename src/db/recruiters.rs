use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::Recruiter;

pub async fn create(
    pool: &PgPool,
    name: &str,
    email: &str,
    password_hash: &str,
) -> Result<Recruiter, sqlx::Error> {
    sqlx::query_as::<_, Recruiter>(
        "INSERT INTO recruiters (name, email, password_hash)
         VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(name)
    .bind(email)
    .bind(password_hash)
    .fetch_one(pool)
    .await
}

pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Recruiter>, sqlx::Error> {
    sqlx::query_as::<_, Recruiter>("SELECT * FROM recruiters WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Recruiter>, sqlx::Error> {
    sqlx::query_as::<_, Recruiter>("SELECT * FROM recruiters WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn set_reset_token(
    pool: &PgPool,
    id: Uuid,
    token: &str,
    expires_at: DateTime<Utc>,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "UPDATE recruiters SET reset_token = $2, reset_token_expires_at = $3 WHERE id = $1",
    )
    .bind(id)
    .bind(token)
    .bind(expires_at)
    .execute(pool)
    .await?;
    Ok(())
}

/// Look up a recruiter holding an unexpired reset token.
pub async fn find_by_reset_token(
    pool: &PgPool,
    id: Uuid,
    token: &str,
) -> Result<Option<Recruiter>, sqlx::Error> {
    sqlx::query_as::<_, Recruiter>(
        "SELECT * FROM recruiters
         WHERE id = $1 AND reset_token = $2 AND reset_token_expires_at > now()",
    )
    .bind(id)
    .bind(token)
    .fetch_optional(pool)
    .await
}

/// Set the new password hash and clear the reset token in one statement.
/// Returns the number of rows updated: 0 means the token was invalid or
/// expired.
pub async fn complete_password_reset(
    pool: &PgPool,
    id: Uuid,
    token: &str,
    password_hash: &str,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE recruiters
         SET password_hash = $3, reset_token = NULL, reset_token_expires_at = NULL
         WHERE id = $1 AND reset_token = $2 AND reset_token_expires_at > now()",
    )
    .bind(id)
    .bind(token)
    .bind(password_hash)
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}
