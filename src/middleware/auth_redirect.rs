use axum::extract::Request;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};

/// Middleware that turns 401 responses into a redirect to the login
/// endpoint. An unauthenticated visitor is sent to log in rather than
/// handed a bare 401.
pub async fn redirect_unauthorized(req: Request, next: Next) -> Response {
    let response = next.run(req).await;
    if response.status() == StatusCode::UNAUTHORIZED {
        Redirect::to("/recruiters/login").into_response()
    } else {
        response
    }
}
