use common::ErrorLocation;
use models::ModelError;

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum LookupError {
    #[error("Invalid Date Format Error: {message} {location}")]
    InvalidDateFormat {
        message: String,
        location: ErrorLocation,
    },

    #[error("Result Error: {message} {location}")]
    Result {
        message: String,
        location: ErrorLocation,
        #[source]
        source: ModelError,
    },
}

impl LookupError {
    /// Human-readable message without the location suffix.
    pub fn message(&self) -> &str {
        match self {
            LookupError::InvalidDateFormat { message, .. } | LookupError::Result { message, .. } => {
                message
            }
        }
    }

    /// Whether the caller caused this error (bad input) rather than the service.
    pub fn is_client_error(&self) -> bool {
        matches!(self, LookupError::InvalidDateFormat { .. })
    }
}

impl From<ModelError> for LookupError {
    #[track_caller]
    fn from(error: ModelError) -> Self {
        LookupError::Result {
            message: String::from("Failed to assemble holiday check result"),
            location: ErrorLocation::from(Location::caller()),
            source: error,
        }
    }
}
