use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::AdverseAction;

/// Upsert keyed by candidate id. Notice dates are written only on the
/// initial insert; a repeat invocation overwrites adjudication and status
/// and leaves the dates untouched.
pub async fn upsert_decision(
    pool: &PgPool,
    candidate_id: Uuid,
    recruiter_id: Uuid,
    adjudication: &str,
    status: &str,
    notice_date: DateTime<Utc>,
) -> Result<AdverseAction, sqlx::Error> {
    sqlx::query_as::<_, AdverseAction>(
        "INSERT INTO adverse_actions
             (candidate_id, recruiter_id, pre_notice_date, post_notice_date, adjudication, status)
         VALUES ($1, $2, $3, $3, $4, $5)
         ON CONFLICT (candidate_id) DO UPDATE
             SET adjudication = EXCLUDED.adjudication, status = EXCLUDED.status
         RETURNING *",
    )
    .bind(candidate_id)
    .bind(recruiter_id)
    .bind(notice_date)
    .bind(adjudication)
    .bind(status)
    .fetch_one(pool)
    .await
}

pub async fn find_by_candidate(
    pool: &PgPool,
    candidate_id: Uuid,
) -> Result<Option<AdverseAction>, sqlx::Error> {
    sqlx::query_as::<_, AdverseAction>(
        "SELECT * FROM adverse_actions WHERE candidate_id = $1",
    )
    .bind(candidate_id)
    .fetch_optional(pool)
    .await
}
