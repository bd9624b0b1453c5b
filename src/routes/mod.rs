pub mod candidates;
pub mod recruiters;

use axum::routing::{get, post};
use axum::Router;

use crate::state::SharedState;

pub fn app_routes() -> Router<SharedState> {
    Router::new()
        // Recruiter auth
        .route(
            "/recruiters/login",
            get(recruiters::get_login).post(recruiters::post_login),
        )
        .route(
            "/recruiters/signup",
            get(recruiters::get_signup).post(recruiters::post_signup),
        )
        .route("/recruiters/logout", post(recruiters::post_logout))
        // Password reset
        .route(
            "/recruiters/reset",
            get(recruiters::get_reset).post(recruiters::post_reset),
        )
        .route(
            "/recruiters/reset/{recruiter_id}",
            get(recruiters::get_new_password),
        )
        .route(
            "/recruiters/new-password",
            post(recruiters::post_new_password),
        )
        // Adjudication workflow
        .route(
            "/recruiters/{recruiter_id}/candidates/{candidate_id}/update-status",
            post(recruiters::update_candidate_status),
        )
        // Candidates
        .route("/candidates", get(candidates::list))
        .route("/candidates/{candidate_id}", get(candidates::get))
        .route(
            "/candidates/{candidate_id}/report",
            get(candidates::get_report),
        )
        .route(
            "/candidates/{candidate_id}/searches",
            get(candidates::list_searches),
        )
}
