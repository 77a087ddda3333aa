//! Appointment Scheduler Server
//!
//! HTTP front end for the appointment and user stores. Handlers translate
//! query parameters and JSON bodies into store calls and store outcomes into
//! status codes; they hold no scheduling logic of their own.

pub mod api;
pub mod config;
pub mod error;
pub mod seed;
pub mod state;

use std::sync::Arc;

use axum::Router;
use datastore::{AppointmentStore, UserStore};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::state::{AppState, SharedState};

/// Creates the application router with all routes configured.
pub fn create_app(state: SharedState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let assets = ServeDir::new(&state.config.assets_dir);

    api::create_router()
        .nest_service("/assets", assets)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Creates the application state from the configuration and store instances.
pub fn create_state<A, U>(config: Config, appointments: A, users: U) -> SharedState
where
    A: AppointmentStore + 'static,
    U: UserStore + 'static,
{
    Arc::new(AppState::new(config, Arc::new(appointments), Arc::new(users)))
}

/// Initializes tracing with the given log level.
pub fn init_tracing(log_level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
