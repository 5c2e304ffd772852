//! Environment overrides for [`ServiceConfig`].

use super::ServiceConfig;
use crate::error::config::ConfigError;

use common::ErrorLocation;

use std::env;
use std::panic::Location;
use std::str::FromStr;

use log::{debug, info, warn};

pub const ENV_SERVER_HOST: &str = "HOLIDAY_SERVICE_HOST";
pub const ENV_SERVER_PORT: &str = "HOLIDAY_SERVICE_PORT";
pub const ENV_PROVIDER_URL: &str = "HOLIDAY_PROVIDER_URL";
pub const ENV_PROVIDER_CONNECT_TIMEOUT_SECS: &str = "HOLIDAY_PROVIDER_CONNECT_TIMEOUT_SECS";
pub const ENV_PROVIDER_REQUEST_TIMEOUT_SECS: &str = "HOLIDAY_PROVIDER_REQUEST_TIMEOUT_SECS";
pub const ENV_LOG_LEVEL: &str = "HOLIDAY_LOG_LEVEL";

/// Load `.env` from the working directory (or a parent) if one exists.
///
/// Variables already present in the process environment are not overwritten.
pub(crate) fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => info!("Loaded .env from: {}", path.display()),
        Err(e) if e.not_found() => debug!("No .env file found"),
        Err(e) => warn!("Failed to parse .env: {e}"),
    }
}

fn read_var(key: &str) -> Option<String> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Some(value),
        Ok(_) => None,
        Err(env::VarError::NotPresent) => None,
        Err(env::VarError::NotUnicode(_)) => {
            warn!("Env var {key} contains invalid unicode, ignoring");
            None
        }
    }
}

#[track_caller]
fn parse_var<T>(key: &str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse::<T>().map_err(|e| ConfigError::EnvError {
        location: ErrorLocation::from(Location::caller()),
        key: key.to_string(),
        reason: format!("'{value}': {e}"),
    })
}

impl ServiceConfig {
    /// Apply `HOLIDAY_*` environment variables on top of the current values.
    ///
    /// Blank variables are treated as unset.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Some(host) = read_var(ENV_SERVER_HOST) {
            debug!("{ENV_SERVER_HOST} overrides server.host");
            self.server.host = host;
        }

        if let Some(port) = read_var(ENV_SERVER_PORT) {
            debug!("{ENV_SERVER_PORT} overrides server.port");
            self.server.port = parse_var(ENV_SERVER_PORT, &port)?;
        }

        if let Some(url) = read_var(ENV_PROVIDER_URL) {
            debug!("{ENV_PROVIDER_URL} overrides provider.base_url");
            self.provider.base_url = url;
        }

        if let Some(secs) = read_var(ENV_PROVIDER_CONNECT_TIMEOUT_SECS) {
            self.provider.connect_timeout_secs =
                parse_var(ENV_PROVIDER_CONNECT_TIMEOUT_SECS, &secs)?;
        }

        if let Some(secs) = read_var(ENV_PROVIDER_REQUEST_TIMEOUT_SECS) {
            self.provider.request_timeout_secs =
                parse_var(ENV_PROVIDER_REQUEST_TIMEOUT_SECS, &secs)?;
        }

        if let Some(level) = read_var(ENV_LOG_LEVEL) {
            debug!("{ENV_LOG_LEVEL} overrides logging.level");
            self.logging.level = level;
        }

        Ok(())
    }
}
