use common::ErrorLocation;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ValidationError {
    #[error("Missing Parameter Error: {message} {location}")]
    MissingParameter {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid Country Code Error: {message} {location}")]
    InvalidCountryCodeLength {
        message: String,
        location: ErrorLocation,
    },
}

impl ValidationError {
    /// Human-readable message without the location suffix.
    pub fn message(&self) -> &str {
        match self {
            ValidationError::MissingParameter { message, .. }
            | ValidationError::InvalidCountryCodeLength { message, .. } => message,
        }
    }
}
