//! Application state.

use std::sync::Arc;

use datastore::{AppointmentStore, UserStore};

use crate::config::Config;

/// Shared application state.
///
/// Store instances are built by the caller and handed in; the request layer
/// never constructs its own.
pub struct AppState {
    /// Server configuration.
    pub config: Config,
    /// Appointment store.
    pub appointments: Arc<dyn AppointmentStore>,
    /// User store.
    pub users: Arc<dyn UserStore>,
}

impl AppState {
    /// Creates new application state.
    pub fn new(
        config: Config,
        appointments: Arc<dyn AppointmentStore>,
        users: Arc<dyn UserStore>,
    ) -> Self {
        Self {
            config,
            appointments,
            users,
        }
    }
}

/// Type alias for shared state.
pub type SharedState = Arc<AppState>;
