//! Appointment Scheduler Server binary.

use std::net::SocketAddr;

use datastore::{MemoryAppointmentStore, MemoryUserStore};
use scheduler_server::{config::Config, create_app, create_state, init_tracing, seed};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env if present
    dotenvy::dotenv().ok();

    let config = Config::from_env();

    init_tracing(&config.log_level);

    tracing::info!(
        seed_demo_data = config.seed_demo_data,
        assets_dir = %config.assets_dir,
        "Starting Appointment Scheduler Server"
    );

    let appointments = MemoryAppointmentStore::new();
    let users = MemoryUserStore::new();

    if config.seed_demo_data {
        seed::seed_demo_data(&appointments, &users).await?;
    }

    let state = create_state(config.clone(), appointments, users);
    let app = create_app(state);

    let addr: SocketAddr = config.server_addr().parse()?;

    tracing::info!(addr = %addr, "Server listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
