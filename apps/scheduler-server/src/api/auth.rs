//! Authentication API endpoint.

use axum::{
    Json,
    extract::State,
    http::header::SET_COOKIE,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::error::{ServerError, ServerResult};
use crate::state::SharedState;

/// Name of the cookie that marks the signed-in user.
pub const USER_COOKIE: &str = "UserID";

/// Credentials posted to `/api/auth`.
#[derive(Debug, Deserialize)]
pub struct AuthRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Looks up the user by email and marks the session with a cookie.
///
/// An unknown email is a 403; a store failure is a 500.
pub async fn authenticate(
    State(state): State<SharedState>,
    Json(request): Json<AuthRequest>,
) -> ServerResult<impl IntoResponse> {
    if request.email.is_empty() || request.password.is_empty() {
        return Err(ServerError::InvalidRequest(
            "username or password missing".to_string(),
        ));
    }

    let user = state
        .users
        .authenticate(&request.email, &request.password)
        .await?
        .ok_or_else(|| {
            tracing::warn!(email = %request.email, "Authentication rejected");
            ServerError::AccessDenied
        })?;

    tracing::info!(user_id = user.id, "User authenticated");

    let cookie = format!("{USER_COOKIE}={}; HttpOnly; Path=/", user.id);
    Ok(([(SET_COOKIE, cookie)], Json(user)))
}
