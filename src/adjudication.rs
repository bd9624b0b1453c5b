//! The adverse-action decision table. An action applied to a candidate's
//! report drives two writes: the embedded report's adjudication/status pair
//! and the per-candidate adverse-action record.

use crate::models::ReportStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionType {
    PreAdverse,
    Engage,
}

/// The field values an action resolves to, on both mutation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub adjudication: &'static str,
    pub report_status: ReportStatus,
    pub adverse_status: &'static str,
}

impl ActionType {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pre-adverse" => Some(ActionType::PreAdverse),
            "engage" => Some(ActionType::Engage),
            _ => None,
        }
    }

    pub fn decision(&self) -> Decision {
        match self {
            ActionType::PreAdverse => Decision {
                adjudication: "Pre-adverse",
                report_status: ReportStatus::Consider,
                adverse_status: "Scheduled",
            },
            ActionType::Engage => Decision {
                adjudication: "Engage",
                report_status: ReportStatus::Clear,
                adverse_status: "Scheduled",
            },
        }
    }
}
