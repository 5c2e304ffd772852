//! Errors returned to HTTP callers.
//!
//! Every variant renders as a JSON body `{status, error, message, path}`.
//! Internal failures never expose their details: the body carries a fixed
//! message and the details stay in the logs.

use crate::error::lookup::LookupError;
use crate::error::validation::ValidationError;

use common::ErrorLocation;

use std::panic::Location;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

pub const INTERNAL_ERROR_MESSAGE: &str = "An internal error occurred while checking the holiday.";

#[derive(Debug, ThisError)]
pub enum ApiError {
    #[error("Bad Request Error: {message} ({path}) {location}")]
    BadRequest {
        message: String,
        path: String,
        location: ErrorLocation,
    },

    #[error("Internal Error: {message} ({path}) {location}")]
    Internal {
        message: String,
        path: String,
        location: ErrorLocation,
    },
}

/// JSON body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub status: u16,
    pub error: String,
    pub message: String,
    pub path: String,
}

impl ApiError {
    #[track_caller]
    pub fn bad_request(message: impl Into<String>, path: impl Into<String>) -> Self {
        ApiError::BadRequest {
            message: message.into(),
            path: path.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal(message: impl Into<String>, path: impl Into<String>) -> Self {
        ApiError::Internal {
            message: message.into(),
            path: path.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn from_validation(error: ValidationError, path: impl Into<String>) -> Self {
        Self::bad_request(error.message(), path)
    }

    /// Bad input becomes a 400 with the lookup's message; anything else is a 500.
    #[track_caller]
    pub fn from_lookup(error: LookupError, path: impl Into<String>) -> Self {
        if error.is_client_error() {
            Self::bad_request(error.message(), path)
        } else {
            Self::internal(error.to_string(), path)
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show to the caller.
    pub fn client_message(&self) -> &str {
        match self {
            ApiError::BadRequest { message, .. } => message,
            ApiError::Internal { .. } => INTERNAL_ERROR_MESSAGE,
        }
    }

    pub fn path(&self) -> &str {
        match self {
            ApiError::BadRequest { path, .. } | ApiError::Internal { path, .. } => path,
        }
    }

    pub fn to_body(&self) -> ErrorBody {
        let status = self.status_code();
        ErrorBody {
            status: status.as_u16(),
            error: status.canonical_reason().unwrap_or("Unknown").to_string(),
            message: self.client_message().to_string(),
            path: self.path().to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.to_body())).into_response()
    }
}
