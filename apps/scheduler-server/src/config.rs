//! Server configuration.

use std::env;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_ASSETS_DIR: &str = "./assets";

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// Log level used when `RUST_LOG` is not set.
    pub log_level: String,
    /// Directory served under `/assets`.
    pub assets_dir: String,
    /// Whether to populate the stores with a demo user and appointment.
    pub seed_demo_data: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            assets_dir: DEFAULT_ASSETS_DIR.to_string(),
            seed_demo_data: true,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through `lookup`, falling back to defaults for
    /// missing or unparseable values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            host: lookup("SCHEDULER_SERVER_HOST").unwrap_or(defaults.host),
            port: lookup("SCHEDULER_SERVER_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            log_level: lookup("SCHEDULER_LOG_LEVEL").unwrap_or(defaults.log_level),
            assets_dir: lookup("SCHEDULER_ASSETS_DIR").unwrap_or(defaults.assets_dir),
            seed_demo_data: lookup("SCHEDULER_SEED_DEMO_DATA")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(defaults.seed_demo_data),
        }
    }

    /// Returns the server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
