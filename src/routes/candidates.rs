use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::auth::session::AuthRecruiter;
use crate::db;
use crate::error::AppError;
use crate::models::{Candidate, Report};
use crate::state::SharedState;

const DEFAULT_PAGE_SIZE: i64 = 10;
const MAX_PAGE_SIZE: i64 = 100;

/// page/limit arrive as raw strings so a non-numeric value falls back to
/// the default instead of rejecting the request.
#[derive(Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl PageParams {
    fn page(&self) -> i64 {
        parse_or(&self.page, 1).max(1)
    }

    fn limit(&self) -> i64 {
        parse_or(&self.limit, DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE)
    }
}

fn parse_or(value: &Option<String>, default: i64) -> i64 {
    value
        .as_deref()
        .and_then(|v| v.parse::<i64>().ok())
        .unwrap_or(default)
}

pub async fn list(
    auth: AuthRecruiter,
    State(state): State<SharedState>,
    Query(params): Query<PageParams>,
) -> Result<Json<serde_json::Value>, AppError> {
    let page = params.page();
    let limit = params.limit();
    let offset = (page - 1) * limit;

    let candidates =
        db::candidates::list_by_recruiter(&state.pool, auth.recruiter_id, limit, offset).await?;
    let total = db::candidates::count_by_recruiter(&state.pool, auth.recruiter_id).await?;

    Ok(Json(json!({
        "candidates": candidates,
        "totalCandidates": total,
    })))
}

pub async fn get(
    auth: AuthRecruiter,
    State(state): State<SharedState>,
    Path(candidate_id): Path<Uuid>,
) -> Result<Json<Candidate>, AppError> {
    let candidate = db::candidates::find_by_id_scoped(&state.pool, candidate_id, auth.recruiter_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Candidate not found".to_string()))?;
    Ok(Json(candidate))
}

pub async fn get_report(
    auth: AuthRecruiter,
    State(state): State<SharedState>,
    Path(candidate_id): Path<Uuid>,
) -> Result<Json<Report>, AppError> {
    // A missing candidate and a candidate without a report are not
    // distinguished: both absences are "Report not found" to the caller.
    let candidate = db::candidates::find_by_id_scoped(&state.pool, candidate_id, auth.recruiter_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Report not found".to_string()))?;

    let report = candidate
        .report
        .ok_or_else(|| AppError::NotFound("Report not found".to_string()))?;

    Ok(Json(report.0))
}

pub async fn list_searches(
    auth: AuthRecruiter,
    State(state): State<SharedState>,
    Path(candidate_id): Path<Uuid>,
    Query(params): Query<PageParams>,
) -> Result<Json<serde_json::Value>, AppError> {
    let candidate = db::candidates::find_by_id_scoped(&state.pool, candidate_id, auth.recruiter_id)
        .await?
        .ok_or_else(|| {
            AppError::NotFound("Candidate Court Searches not found".to_string())
        })?;

    // The searches sequence is embedded in the candidate document, so
    // pagination slices in memory after loading the whole document. That is
    // the intended cost profile; do not push this into the store.
    let page = params.page();
    let limit = params.limit();
    let skip = ((page - 1) * limit) as usize;

    let searches = &candidate.searches.0;
    let total = searches.len();
    let slice: Vec<_> = searches.iter().skip(skip).take(limit as usize).collect();

    Ok(Json(json!({
        "searches": slice,
        "totalCourtSearches": total,
    })))
}
