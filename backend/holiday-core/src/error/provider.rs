use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ProviderError {
    #[error("HTTP Error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON Error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
    },

    #[error("URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },

    #[error("Provider Status Error: HTTP {status} - {message} {location}")]
    Status {
        status: HttpStatusCode,
        message: String,
        location: ErrorLocation,
    },
}

impl From<url::ParseError> for ProviderError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        ProviderError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for ProviderError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        ProviderError::Http {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for ProviderError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        ProviderError::Json {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
