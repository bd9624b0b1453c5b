use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Server-side session record. Only the recruiter id is kept here; the
/// recruiter itself is re-fetched per request when needed.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Session {
    pub id: Uuid,
    pub recruiter_id: Uuid,
    pub token_hash: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}
