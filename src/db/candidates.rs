use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{Candidate, CourtSearch, Report};

/// Every read here is scoped by recruiter id; a candidate id alone is never
/// trusted.
pub async fn find_by_id_scoped(
    pool: &PgPool,
    id: Uuid,
    recruiter_id: Uuid,
) -> Result<Option<Candidate>, sqlx::Error> {
    sqlx::query_as::<_, Candidate>(
        "SELECT * FROM candidates WHERE id = $1 AND recruiter_id = $2",
    )
    .bind(id)
    .bind(recruiter_id)
    .fetch_optional(pool)
    .await
}

pub async fn list_by_recruiter(
    pool: &PgPool,
    recruiter_id: Uuid,
    limit: i64,
    offset: i64,
) -> Result<Vec<Candidate>, sqlx::Error> {
    sqlx::query_as::<_, Candidate>(
        "SELECT * FROM candidates WHERE recruiter_id = $1
         ORDER BY created_at LIMIT $2 OFFSET $3",
    )
    .bind(recruiter_id)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await
}

pub async fn count_by_recruiter(pool: &PgPool, recruiter_id: Uuid) -> Result<i64, sqlx::Error> {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM candidates WHERE recruiter_id = $1")
        .bind(recruiter_id)
        .fetch_one(pool)
        .await?;
    Ok(row.0)
}

/// Overwrite the embedded report's adjudication and status together. The
/// `report IS NOT NULL` guard keeps the workflow from inventing a report.
pub async fn set_report_decision(
    pool: &PgPool,
    id: Uuid,
    adjudication: &str,
    status: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "UPDATE candidates
         SET report = jsonb_set(
             jsonb_set(report, '{adjudication}', to_jsonb($2::text)),
             '{status}', to_jsonb($3::text))
         WHERE id = $1 AND report IS NOT NULL",
    )
    .bind(id)
    .bind(adjudication)
    .bind(status)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn create(
    pool: &PgPool,
    recruiter_id: Uuid,
    name: &str,
    email: &str,
    report: Option<Report>,
    searches: Vec<CourtSearch>,
) -> Result<Candidate, sqlx::Error> {
    sqlx::query_as::<_, Candidate>(
        "INSERT INTO candidates (recruiter_id, name, email, report, searches)
         VALUES ($1, $2, $3, $4, $5) RETURNING *",
    )
    .bind(recruiter_id)
    .bind(name)
    .bind(email)
    .bind(report.map(Json))
    .bind(Json(searches))
    .fetch_one(pool)
    .await
}
