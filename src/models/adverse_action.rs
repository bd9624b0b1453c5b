use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Compliance record tracking notice dates and status for a candidate under
/// an Engage or Pre-adverse decision. At most one exists per candidate;
/// notice dates are set once at creation and never refreshed.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdverseAction {
    pub id: Uuid,
    pub candidate_id: Uuid,
    pub recruiter_id: Option<Uuid>,
    pub pre_notice_date: DateTime<Utc>,
    pub post_notice_date: DateTime<Utc>,
    pub adjudication: String,
    pub status: String,
}
