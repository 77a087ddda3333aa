//! User API endpoints.

use axum::{Json, extract::State};
use entities::User;

use crate::error::ServerResult;
use crate::state::SharedState;

/// Lists all users.
pub async fn list_users(State(state): State<SharedState>) -> ServerResult<Json<Vec<User>>> {
    let users = state.users.list_users().await?;
    Ok(Json(users))
}
