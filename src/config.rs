//! Configuration loader for the `safecity-hotspots` backend service.
//!
//! This module centralizes all runtime configuration values and their defaults,
//! loading from environment variables (with optional `.env` file support
//! provided by the caller). By consolidating configuration logic here, we
//! avoid scattering `env::var` calls throughout the codebase.

use std::env;

use anyhow::{anyhow, Result};

/// Parse an optional integer environment variable with a default value.
macro_rules! parse_env_int {
    ($var_name:expr, $ty:ty, $default:expr) => {
        env::var($var_name)
            .ok()
            .map(|v| v.parse::<$ty>())
            .transpose()
            .map_err(|e| anyhow!("Invalid {}: {}", $var_name, e))?
            .unwrap_or($default)
    };
}

/// Strongly typed application configuration.
///
/// All fields are immutable after loading, ensuring a consistent configuration
/// snapshot for the lifetime of the application.
#[derive(Debug, Clone)]
pub struct Config {
    // ---
    /// TCP port the HTTP server binds on.
    pub port: u16,

    /// Number of generator trials for the startup seed dataset.
    pub seed_events: u32,

    /// Patrol count used when a request does not pass `?patrols=`.
    pub default_patrols: u32,
}

/// Load configuration from environment variables with defaults.
///
/// Optional:
/// - `SAFECITY_PORT` – HTTP port (default: 8080)
/// - `SAFECITY_SEED_EVENTS` – startup generation trial count (default: 500)
/// - `SAFECITY_DEFAULT_PATROLS` – fallback patrol count (default: 3)
///
/// Every variable has a default; the only failure mode is a value that does
/// not parse as the expected integer type.
pub fn load_from_env() -> Result<Config> {
    // ---
    let port = parse_env_int!("SAFECITY_PORT", u16, 8080);
    let seed_events = parse_env_int!("SAFECITY_SEED_EVENTS", u32, 500);
    let default_patrols = parse_env_int!("SAFECITY_DEFAULT_PATROLS", u32, 3);

    Ok(Config {
        port,
        seed_events,
        default_patrols,
    })
}

impl Config {
    /// Log the loaded configuration for debugging purposes.
    pub fn log_config(&self) {
        // ---
        tracing::info!("Configuration loaded:");
        tracing::info!("  SAFECITY_PORT            : {}", self.port);
        tracing::info!("  SAFECITY_SEED_EVENTS     : {}", self.seed_events);
        tracing::info!("  SAFECITY_DEFAULT_PATROLS : {}", self.default_patrols);
    }
}
