use common::ErrorLocation;

use thiserror::Error;

/// Errors that stop the service binary from starting.
#[derive(Debug, Error)]
pub enum HolidayServiceError {
    /// Configuration, provider client or listener setup failed
    #[error("Startup Error: {message} {location}")]
    Startup {
        message: String,
        location: ErrorLocation,
    },

    /// Logging backend could not be installed
    #[error("Logger Error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },
}
