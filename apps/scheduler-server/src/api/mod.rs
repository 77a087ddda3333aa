//! API endpoints.

pub mod appointment;
pub mod auth;
pub mod user;

use axum::{
    Router,
    routing::{get, post},
};
use serde::Serialize;

use crate::state::SharedState;

/// Body returned by endpoints that have nothing to report.
#[derive(Debug, Serialize)]
pub struct EmptyResponse {}

/// Creates the API router with all endpoints.
pub fn create_router() -> Router<SharedState> {
    Router::new()
        // Auth endpoints
        .route("/api/auth", post(auth::authenticate))
        // Appointment endpoints
        .route("/api/appts", get(appointment::query_appointments))
        .route("/api/appts/add", post(appointment::add_appointment))
        .route("/api/appts/update", post(appointment::update_appointment))
        .route("/api/appts/delete", post(appointment::delete_appointment))
        // User endpoints
        .route("/api/users", get(user::list_users))
        // Health check
        .route("/health", get(health_check))
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
