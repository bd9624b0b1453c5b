use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;
use axum_extra::extract::cookie::{Cookie, SameSite};
use axum_extra::extract::CookieJar;
use chrono::{Duration, Utc};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::adjudication::ActionType;
use crate::auth::password;
use crate::auth::session::{
    clear_session_cookie, generate_token, hash_token, session_cookie, AuthRecruiter,
};
use crate::db;
use crate::error::{AppError, FieldError};
use crate::models::AdverseAction;
use crate::state::SharedState;
use crate::validate;

const FLASH_COOKIE: &str = "vetflow_flash";

#[derive(Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct ResetRequest {
    pub email: String,
}

#[derive(Deserialize)]
pub struct ResetTokenQuery {
    pub token: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPasswordRequest {
    pub recruiter_id: Uuid,
    pub password_token: String,
    pub password: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusRequest {
    pub action_type: String,
}

// ── Flash messages ──────────────────────────────────────────────
//
// One-shot messages (e.g. "Invalid email or password.") ride a short-lived
// cookie: set on the redirect, drained by the next GET view.

fn flash_cookie(message: &str) -> Cookie<'static> {
    Cookie::build((FLASH_COOKIE, message.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

fn take_flash(jar: CookieJar) -> (CookieJar, Option<String>) {
    match jar.get(FLASH_COOKIE) {
        Some(cookie) => {
            let message = cookie.value().to_string();
            let removal = Cookie::build((FLASH_COOKIE, "")).path("/").build();
            (jar.remove(removal), Some(message))
        }
        None => (jar, None),
    }
}

// ── Views ───────────────────────────────────────────────────────

pub async fn get_login(jar: CookieJar) -> impl IntoResponse {
    let (jar, flash) = take_flash(jar);
    (
        jar,
        Json(json!({ "path": "/recruiters/login", "errorMessage": flash })),
    )
}

pub async fn get_signup(jar: CookieJar) -> impl IntoResponse {
    let (jar, flash) = take_flash(jar);
    (
        jar,
        Json(json!({ "path": "/recruiters/signup", "errorMessage": flash })),
    )
}

pub async fn get_reset(_auth: AuthRecruiter, jar: CookieJar) -> impl IntoResponse {
    let (jar, flash) = take_flash(jar);
    (
        jar,
        Json(json!({ "path": "/recruiters/reset", "errorMessage": flash })),
    )
}

// ── Signup / login / logout ─────────────────────────────────────

pub async fn post_signup(
    State(state): State<SharedState>,
    Json(req): Json<SignupRequest>,
) -> Result<Response, AppError> {
    let mut errors = validate::signup_errors(&req.name, &req.email, &req.password);

    if errors.is_empty()
        && db::recruiters::find_by_email(&state.pool, req.email.trim())
            .await?
            .is_some()
    {
        errors.push(FieldError::new(
            "email",
            "Email already exists, enter a different one.",
        ));
    }

    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let pw_hash = password::hash(req.password.trim()).map_err(AppError::Internal)?;
    let recruiter =
        db::recruiters::create(&state.pool, req.name.trim(), req.email.trim(), &pw_hash).await?;

    tracing::info!(recruiter_id = %recruiter.id, "Recruiter signed up");

    Ok((StatusCode::CREATED, Json(recruiter)).into_response())
}

pub async fn post_login(
    State(state): State<SharedState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<Response, AppError> {
    let errors = validate::login_errors(&req.email, &req.password);
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    // A missing recruiter and a wrong password get the same outcome, so the
    // response never discloses which one it was.
    let invalid = |jar: CookieJar| {
        (
            jar.add(flash_cookie("Invalid email or password.")),
            Redirect::to("/recruiters/login"),
        )
            .into_response()
    };

    let Some(recruiter) = db::recruiters::find_by_email(&state.pool, req.email.trim()).await?
    else {
        return Ok(invalid(jar));
    };

    let matches = password::verify(req.password.trim(), &recruiter.password_hash)
        .map_err(AppError::Internal)?;
    if !matches {
        return Ok(invalid(jar));
    }

    let token = generate_token();
    let ttl = state.config.session_ttl_hours;
    db::sessions::create(
        &state.pool,
        recruiter.id,
        &hash_token(&token),
        Utc::now() + Duration::hours(ttl),
    )
    .await?;

    tracing::info!(recruiter_id = %recruiter.id, "Recruiter logged in");

    Ok((
        jar.add(session_cookie(&token, ttl)),
        Redirect::to("/candidates"),
    )
        .into_response())
}

pub async fn post_logout(
    _auth: AuthRecruiter,
    State(state): State<SharedState>,
    jar: CookieJar,
) -> Response {
    // Session destruction failures are logged, never surfaced: the visitor
    // is sent back to the login page either way.
    if let Some(cookie) = jar.get(crate::auth::session::SESSION_COOKIE) {
        if let Err(e) = db::sessions::delete_by_hash(&state.pool, &hash_token(cookie.value())).await
        {
            tracing::warn!("Failed to delete session on logout: {e}");
        }
    }

    (
        jar.add(clear_session_cookie()),
        Redirect::to("/recruiters/login"),
    )
        .into_response()
}

// ── Password reset ──────────────────────────────────────────────

pub async fn post_reset(
    _auth: AuthRecruiter,
    State(state): State<SharedState>,
    Json(req): Json<ResetRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let recruiter = db::recruiters::find_by_email(&state.pool, req.email.trim())
        .await?
        .ok_or_else(|| AppError::NotFound("No account with that email found.".to_string()))?;

    let token = generate_token();
    db::recruiters::set_reset_token(
        &state.pool,
        recruiter.id,
        &token,
        Utc::now() + Duration::hours(1),
    )
    .await?;

    // No mail delivery here: the token travels back in the response only.
    Ok(Json(json!({
        "message": "Password reset token generated.",
        "token": token,
    })))
}

pub async fn get_new_password(
    _auth: AuthRecruiter,
    State(state): State<SharedState>,
    jar: CookieJar,
    Path(recruiter_id): Path<Uuid>,
    Query(query): Query<ResetTokenQuery>,
) -> Result<Response, AppError> {
    let token = query.token.unwrap_or_default();
    db::recruiters::find_by_reset_token(&state.pool, recruiter_id, &token)
        .await?
        .ok_or_else(|| AppError::NotFound("Invalid reset token or recruiter ID.".to_string()))?;

    let (jar, flash) = take_flash(jar);
    Ok((
        jar,
        Json(json!({
            "path": "/recruiters/new-password",
            "errorMessage": flash,
            "recruiterId": recruiter_id,
        })),
    )
        .into_response())
}

pub async fn post_new_password(
    _auth: AuthRecruiter,
    State(state): State<SharedState>,
    Json(req): Json<NewPasswordRequest>,
) -> Result<Response, AppError> {
    if let Some(error) = validate::check_password(&req.password) {
        return Err(AppError::Validation(vec![error]));
    }

    let pw_hash = password::hash(req.password.trim()).map_err(AppError::Internal)?;

    // Password update and token clearing happen in one statement, guarded by
    // the token-and-expiry match.
    let updated = db::recruiters::complete_password_reset(
        &state.pool,
        req.recruiter_id,
        &req.password_token,
        &pw_hash,
    )
    .await?;

    if updated == 0 {
        return Err(AppError::NotFound(
            "Invalid reset token or recruiter ID.".to_string(),
        ));
    }

    // Old sessions die with the old password.
    db::sessions::delete_all_for_recruiter(&state.pool, req.recruiter_id).await?;

    Ok(Redirect::to("/recruiters/login").into_response())
}

// ── Adjudication workflow ───────────────────────────────────────

pub async fn update_candidate_status(
    _auth: AuthRecruiter,
    State(state): State<SharedState>,
    Path((recruiter_id, candidate_id)): Path<(Uuid, Uuid)>,
    Json(req): Json<UpdateStatusRequest>,
) -> Result<Json<AdverseAction>, AppError> {
    let action = ActionType::parse(&req.action_type)
        .ok_or_else(|| AppError::BadRequest("Invalid action type".to_string()))?;

    db::recruiters::find_by_id(&state.pool, recruiter_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Recruiter with given id is not found.".to_string()))?;

    let candidate = db::candidates::find_by_id_scoped(&state.pool, candidate_id, recruiter_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Candidate with given id is not found.".to_string()))?;

    // The workflow only ever mutates an existing report.
    if candidate.report.is_none() {
        return Err(AppError::NotFound(format!(
            "No report found for Candidate with Id: {candidate_id}"
        )));
    }

    let decision = action.decision();

    db::candidates::set_report_decision(
        &state.pool,
        candidate_id,
        decision.adjudication,
        decision.report_status.as_str(),
    )
    .await?;

    let adverse_action = db::adverse_actions::upsert_decision(
        &state.pool,
        candidate_id,
        recruiter_id,
        decision.adjudication,
        decision.adverse_status,
        Utc::now(),
    )
    .await?;

    tracing::info!(
        %candidate_id,
        adjudication = decision.adjudication,
        "Adverse action recorded"
    );

    Ok(Json(adverse_action))
}
