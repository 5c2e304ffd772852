use chrono::{Datelike, NaiveDate};

/// A single "is this date a holiday here?" question.
///
/// Keeps the caller's original date text next to the parsed date: the
/// provider list is matched against the exact input string, while the
/// parsed form only supplies the year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayQuery {
    raw_date: String,
    date: NaiveDate,
    country_code: String,
}

impl HolidayQuery {
    pub fn new(raw_date: impl Into<String>, date: NaiveDate, country_code: impl Into<String>) -> Self {
        Self {
            raw_date: raw_date.into(),
            date,
            country_code: country_code.into(),
        }
    }

    pub fn raw_date(&self) -> &str {
        &self.raw_date
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }
}
