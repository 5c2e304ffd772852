pub mod builder;

use serde::{Deserialize, Serialize};

/// Response contract of a holiday check.
///
/// `holiday_name` is `Some` exactly when `is_holiday` is true. Construct through
/// [`HolidayCheckResult::holiday`], [`HolidayCheckResult::not_holiday`] or
/// [`HolidayCheckResultBuilder`](builder::HolidayCheckResultBuilder).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidayCheckResult {
    date: String,
    country_code: String,
    is_holiday: bool,
    holiday_name: Option<String>,
}

impl HolidayCheckResult {
    pub fn holiday(
        date: impl Into<String>,
        country_code: impl Into<String>,
        holiday_name: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            country_code: country_code.into(),
            is_holiday: true,
            holiday_name: Some(holiday_name.into()),
        }
    }

    pub fn not_holiday(date: impl Into<String>, country_code: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            country_code: country_code.into(),
            is_holiday: false,
            holiday_name: None,
        }
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    pub fn is_holiday(&self) -> bool {
        self.is_holiday
    }

    pub fn holiday_name(&self) -> Option<&str> {
        self.holiday_name.as_deref()
    }
}
