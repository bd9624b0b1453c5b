use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use uuid::Uuid;

/// A candidate document. The background-check report and the court-search
/// sequence live embedded in the row (JSONB), mirroring the document layout
/// the service persists: reading a candidate always loads both.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: Uuid,
    pub recruiter_id: Uuid,
    pub name: String,
    pub email: String,
    pub dob: Option<String>,
    pub phone_number: Option<String>,
    pub location: Option<String>,
    pub zipcode: Option<String>,
    pub social_security: Option<String>,
    pub drivers_license: Option<String>,
    pub report: Option<Json<Report>>,
    pub searches: Json<Vec<CourtSearch>>,
    pub created_at: DateTime<Utc>,
}

/// Background-check outcome embedded in a candidate. `status` and
/// `adjudication` are only ever mutated together, by the adjudication
/// workflow.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub status: ReportStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adjudication: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub turn_around_time: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportStatus {
    Clear,
    Consider,
}

impl ReportStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Clear => "Clear",
            ReportStatus::Consider => "Consider",
        }
    }
}

/// One court-search result in a candidate's embedded sequence. Read-only
/// from this service's perspective; only listed and paginated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourtSearch {
    pub search: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candidate_id: Option<Uuid>,
}
