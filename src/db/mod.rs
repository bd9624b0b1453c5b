pub mod adverse_actions;
pub mod candidates;
pub mod recruiters;
pub mod sessions;
