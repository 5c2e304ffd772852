//! Holiday lookup: date parsing, provider fetch and exact-date matching.

use crate::error::lookup::LookupError;
use crate::error::provider::ProviderError;
use crate::provider::ProviderClient;

use common::ErrorLocation;
use models::{HolidayCheckResult, HolidayCheckResultBuilder, HolidayQuery, ProviderHoliday};

use std::panic::Location;

use chrono::NaiveDate;
use log::{error, info, warn};

pub const INVALID_DATE_FORMAT_MESSAGE: &str = "Invalid date format. Please use YYYY-MM-DD.";

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";
const ISO_DATE_LENGTH: usize = 10;

/// Answers "is this date a public holiday in this country?".
///
/// Stateless apart from the shared provider client, so one instance serves
/// all concurrent requests.
#[derive(Clone)]
pub struct HolidayService {
    provider: ProviderClient,
}

impl HolidayService {
    pub fn new(provider: ProviderClient) -> Self {
        Self { provider }
    }

    /// Check whether `date` (YYYY-MM-DD) is a public holiday in `country_code`.
    ///
    /// `country_code` is expected to be validated and uppercased already.
    /// Provider failures are logged and treated as "no holidays that year",
    /// so they produce a negative answer rather than an error.
    ///
    /// # Errors
    ///
    /// - [`LookupError::InvalidDateFormat`] if `date` is not a valid ISO calendar date
    /// - [`LookupError::Result`] if the result cannot be assembled
    pub async fn check_holiday(
        &self,
        date: &str,
        country_code: &str,
    ) -> Result<HolidayCheckResult, LookupError> {
        let query = HolidayQuery::new(date, parse_iso_date(date)?, country_code);

        let holidays = self.year_holidays(&query).await;

        let holiday_name = find_holiday(&holidays, query.raw_date()).and_then(|h| h.display_name());

        let builder = HolidayCheckResultBuilder::default()
            .with_date(query.raw_date())
            .with_country_code(query.country_code());

        let result = match holiday_name {
            Some(name) => {
                info!(
                    "Date {} IS a public holiday in {}: {}",
                    query.raw_date(),
                    query.country_code(),
                    name
                );
                builder.with_is_holiday(true).with_holiday_name(name).build()?
            }
            None => {
                info!(
                    "Date {} is NOT a public holiday in {}",
                    query.raw_date(),
                    query.country_code()
                );
                builder.with_is_holiday(false).build()?
            }
        };

        Ok(result)
    }

    /// Provider list for the query's year, or empty on any provider failure.
    async fn year_holidays(&self, query: &HolidayQuery) -> Vec<ProviderHoliday> {
        let year = query.year();
        let country_code = query.country_code();

        match self.provider.fetch_year_holidays(year, country_code).await {
            Ok(holidays) => holidays,
            Err(ProviderError::Status {
                status, message, ..
            }) if status.is_client_error() => {
                error!(
                    "HTTP error calling holiday provider for {year}/{country_code}: {status} - {message}"
                );
                Vec::new()
            }
            Err(e) => {
                error!("Error calling holiday provider for {year}/{country_code}: {e}");
                Vec::new()
            }
        }
    }
}

/// Parse a strict `YYYY-MM-DD` calendar date.
///
/// Rejects short forms like `2025-1-5` and impossible dates like `2025-02-30`.
#[track_caller]
pub fn parse_iso_date(date: &str) -> Result<NaiveDate, LookupError> {
    let location = ErrorLocation::from(Location::caller());

    let well_formed = date.len() == ISO_DATE_LENGTH
        && date.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });

    let parsed = if well_formed {
        NaiveDate::parse_from_str(date, ISO_DATE_FORMAT).ok()
    } else {
        None
    };

    parsed.ok_or_else(|| {
        warn!("Invalid date format received: {date}");
        LookupError::InvalidDateFormat {
            message: INVALID_DATE_FORMAT_MESSAGE.to_string(),
            location,
        }
    })
}

/// First holiday on exactly `date` that has a usable name.
///
/// The provider can list the same date more than once; a nameless entry does
/// not hide a named one further down.
pub fn find_holiday<'a>(holidays: &'a [ProviderHoliday], date: &str) -> Option<&'a ProviderHoliday> {
    holidays
        .iter()
        .filter(|holiday| holiday.date == date)
        .find(|holiday| holiday.display_name().is_some())
}
