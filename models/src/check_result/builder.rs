use crate::error::model_error::ModelError;
use crate::HolidayCheckResult;

use common::ErrorLocation;

use std::panic::Location;

/// Builder for creating validated HolidayCheckResult instances.
///
/// Enforces the result invariant: a holiday always carries a non-empty name,
/// a non-holiday never carries one.
#[derive(Debug, Default)]
pub struct HolidayCheckResultBuilder {
    date: Option<String>,
    country_code: Option<String>,
    is_holiday: Option<bool>,
    holiday_name: Option<String>,
}

impl HolidayCheckResultBuilder {
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn with_country_code(mut self, country_code: impl Into<String>) -> Self {
        self.country_code = Some(country_code.into());
        self
    }

    pub fn with_is_holiday(mut self, is_holiday: bool) -> Self {
        self.is_holiday = Some(is_holiday);
        self
    }

    pub fn with_holiday_name(mut self, name: impl Into<String>) -> Self {
        self.holiday_name = Some(name.into());
        self
    }

    /// Build the HolidayCheckResult with validation.
    #[track_caller]
    pub fn build(self) -> Result<HolidayCheckResult, ModelError> {
        let date = self.date.ok_or_else(|| ModelError::Validation {
            message: String::from("Date is required"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let country_code = self.country_code.ok_or_else(|| ModelError::Validation {
            message: String::from("Country code is required"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let is_holiday = self.is_holiday.ok_or_else(|| ModelError::Validation {
            message: String::from("Holiday flag is required"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        match (is_holiday, self.holiday_name) {
            (true, Some(name)) if !name.trim().is_empty() => {
                Ok(HolidayCheckResult::holiday(date, country_code, name))
            }
            (true, _) => Err(ModelError::Validation {
                message: format!("Holiday on {date} requires a non-empty name"),
                location: ErrorLocation::from(Location::caller()),
            }),
            (false, Some(name)) => Err(ModelError::Validation {
                message: format!("Non-holiday on {date} cannot carry a name ('{name}')"),
                location: ErrorLocation::from(Location::caller()),
            }),
            (false, None) => Ok(HolidayCheckResult::not_holiday(date, country_code)),
        }
    }
}
