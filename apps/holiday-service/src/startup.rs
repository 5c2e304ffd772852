//! Configuration and logging bootstrap for the service binary.

use crate::error::HolidayServiceError;
use crate::logger::{
    attach_log_file, disable_log_file, initialize as LoggerInitialize, set_level,
};

use holiday_core::config::ServiceConfig;

use common::ErrorLocation;

use std::fmt::Display;
use std::panic::Location;
use std::path::Path;

use log::LevelFilter;

/// Level used while the configuration is being read.
const BOOTSTRAP_LOG_LEVEL: LevelFilter = LevelFilter::Trace;

/// Install the logger, then load the configuration and apply its logging section.
///
/// Config-time diagnostics (`.env` problems, ignored variables, which file was
/// read) are emitted after the logger exists and reach the log file once its
/// directory is known.
pub fn load_config(path: Option<&Path>) -> Result<ServiceConfig, HolidayServiceError> {
    LoggerInitialize(BOOTSTRAP_LOG_LEVEL)?;

    let config = ServiceConfig::load(path).map_err(startup_error)?;
    let level = config.logging.level_filter().map_err(startup_error)?;

    match config.logging.directory.as_deref() {
        Some(dir) => attach_log_file(dir)?,
        None => disable_log_file(),
    }

    set_level(level);

    Ok(config)
}

#[track_caller]
pub fn startup_error(e: impl Display) -> HolidayServiceError {
    HolidayServiceError::Startup {
        message: e.to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}
