//! Syntactic validation of holiday check parameters.
//!
//! Runs before any network activity. Only the shape of the input is checked;
//! whether a country code actually exists is left to the provider.

use crate::error::validation::ValidationError;

use common::ErrorLocation;

use std::panic::Location;

use log::warn;

pub const MISSING_PARAMETERS_MESSAGE: &str =
    "Both 'date' (YYYY-MM-DD) and 'countryCode' parameters are required.";
pub const INVALID_COUNTRY_CODE_MESSAGE: &str = "countryCode must be a 2-letter ISO code.";

const COUNTRY_CODE_LENGTH: usize = 2;

/// Parameters that passed validation. The country code is uppercased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedParams {
    pub date: String,
    pub country_code: String,
}

/// Validator for the raw `date` / `countryCode` query parameters.
#[derive(Debug, Clone, Copy)]
pub struct RequestValidator {
    /// Required country code length, in characters.
    country_code_length: usize,
}

impl Default for RequestValidator {
    fn default() -> Self {
        Self {
            country_code_length: COUNTRY_CODE_LENGTH,
        }
    }
}

impl RequestValidator {
    /// Validate the raw inputs.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::MissingParameter`] if either value is absent or blank
    /// - [`ValidationError::InvalidCountryCodeLength`] if the country code is not
    ///   exactly two characters long
    #[track_caller]
    pub fn validate(
        &self,
        date: Option<&str>,
        country_code: Option<&str>,
    ) -> Result<ValidatedParams, ValidationError> {
        let (date, country_code) = match (non_blank(date), non_blank(country_code)) {
            (Some(date), Some(country_code)) => (date, country_code),
            _ => {
                warn!(
                    "Missing required parameters: date='{}', countryCode='{}'",
                    date.unwrap_or_default(),
                    country_code.unwrap_or_default()
                );
                return Err(ValidationError::MissingParameter {
                    message: MISSING_PARAMETERS_MESSAGE.to_string(),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        };

        if country_code.chars().count() != self.country_code_length {
            warn!("Invalid country code format received: {country_code}");
            return Err(ValidationError::InvalidCountryCodeLength {
                message: INVALID_COUNTRY_CODE_MESSAGE.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(ValidatedParams {
            date: date.to_string(),
            country_code: country_code.to_uppercase(),
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
