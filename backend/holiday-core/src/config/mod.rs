mod env;

pub use env::{
    ENV_LOG_LEVEL, ENV_PROVIDER_CONNECT_TIMEOUT_SECS, ENV_PROVIDER_REQUEST_TIMEOUT_SECS,
    ENV_PROVIDER_URL, ENV_SERVER_HOST, ENV_SERVER_PORT,
};

use crate::DEFAULT_PROVIDER_BASE_URL;
use crate::error::config::ConfigError;

use common::ErrorLocation;

use std::panic::Location;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use log::{LevelFilter, info};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = "holiday-service.toml";

// ============================================
// CONFIG STRUCTS
// ============================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(default = "default_provider_base_url")]
    pub base_url: String,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: default_provider_base_url(),
            connect_timeout_secs: default_connect_timeout_secs(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl ProviderConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// File logging is disabled when unset.
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            directory: None,
        }
    }
}

impl LoggingConfig {
    #[track_caller]
    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(&self.level).map_err(|_| ConfigError::ValidationError {
            location: ErrorLocation::from(Location::caller()),
            reason: format!(
                "Invalid log level: '{}' (expected off, error, warn, info, debug or trace)",
                self.level
            ),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub provider: ProviderConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

// ============================================
// DEFAULT FUNCTIONS
// ============================================

fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_port() -> u16 {
    8080
}
fn default_provider_base_url() -> String {
    DEFAULT_PROVIDER_BASE_URL.to_string()
}
fn default_connect_timeout_secs() -> u64 {
    5
}
fn default_request_timeout_secs() -> u64 {
    10
}
fn default_log_level() -> String {
    "info".to_string()
}

// ============================================
// IMPLEMENTATION
// ============================================

impl ServiceConfig {
    /// Load the service configuration.
    ///
    /// Order of precedence (last wins):
    /// 1. Built-in defaults
    /// 2. TOML file (`path`, or `holiday-service.toml` in the working directory)
    /// 3. `.env` file and process environment (`HOLIDAY_*` variables)
    ///
    /// A missing default file is not an error. An explicit `path` that does not
    /// exist, an unreadable or invalid file, or an unparseable environment value is.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        env::load_dotenv();

        let mut config = match path {
            Some(path) => Self::load_from_path(path)?,
            None => {
                let default_path = PathBuf::from(CONFIG_FILE_NAME);
                if default_path.exists() {
                    Self::load_from_path(&default_path)?
                } else {
                    info!("Config file {CONFIG_FILE_NAME} not found, using defaults");
                    Self::default()
                }
            }
        };

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Load from a specific TOML file without environment overrides.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            location: ErrorLocation::from(Location::caller()),
            path: path.to_path_buf(),
            source: e,
        })?;

        let config = Self::from_toml_str(&contents, path)?;

        info!("Config loaded from {}", path.display());
        Ok(config)
    }

    #[track_caller]
    pub fn from_toml_str(contents: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::ParseError {
            location: ErrorLocation::from(Location::caller()),
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Validate config values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.host.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: "server.host cannot be empty".to_string(),
            });
        }

        let base_url = &self.provider.base_url;
        if base_url.is_empty() {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: "provider.base_url cannot be empty".to_string(),
            });
        }

        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!("Invalid provider URL format: {base_url}"),
            });
        }

        if self.provider.connect_timeout_secs == 0 || self.provider.request_timeout_secs == 0 {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!(
                    "Provider timeouts must be positive (connect={}s, request={}s)",
                    self.provider.connect_timeout_secs, self.provider.request_timeout_secs
                ),
            });
        }

        self.logging.level_filter()?;

        Ok(())
    }
}
