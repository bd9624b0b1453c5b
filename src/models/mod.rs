mod adverse_action;
mod candidate;
mod recruiter;
mod session;

pub use adverse_action::AdverseAction;
pub use candidate::{Candidate, CourtSearch, Report, ReportStatus};
pub use recruiter::Recruiter;
pub use session::Session;
