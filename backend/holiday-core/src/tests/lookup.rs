// Unit tests for the pure parts of the lookup: date parsing and matching
// Provider-backed behaviour is covered in integration_tests/lookup

use crate::error::lookup::LookupError;
use crate::lookup::{INVALID_DATE_FORMAT_MESSAGE, find_holiday, parse_iso_date};

use models::ProviderHoliday;

use chrono::{Datelike, NaiveDate};

fn holiday(date: &str, name: &str) -> ProviderHoliday {
    ProviderHoliday {
        date: date.to_string(),
        name: Some(name.to_string()),
        local_name: Some(name.to_string()),
        country_code: Some("US".to_string()),
        holiday_type: Some("Public".to_string()),
    }
}

/// **VALUE**: Verifies a valid ISO date parses and exposes the year used for the provider URL.
#[test]
fn given_iso_date_when_parsed_then_returns_calendar_date() {
    let date = parse_iso_date("2025-12-25").unwrap();

    assert_eq!(date, NaiveDate::from_ymd_opt(2025, 12, 25).unwrap());
    assert_eq!(date.year(), 2025);
}

/// **VALUE**: Verifies invalid calendar dates and malformed strings become `InvalidDateFormat`.
///
/// **WHY THIS MATTERS**: These are client errors (400); if parsing were lenient, the
/// service would query the provider for nonsense and answer "not a holiday".
///
/// **BUG THIS CATCHES**: Would catch lenient parsing of single-digit months/days,
/// impossible dates (month 13, Feb 30) or trailing garbage.
#[test]
fn given_invalid_dates_when_parsed_then_returns_invalid_date_format() {
    let cases = [
        "2025-13-01",
        "2025-02-30",
        "2025-1-05",
        "2025-01-5",
        "25-12-2025",
        "2025/12/25",
        "2025-12-25T00:00",
        " 2025-12-25",
        "not-a-date",
        "",
    ];

    for input in cases {
        match parse_iso_date(input) {
            Err(LookupError::InvalidDateFormat { ref message, .. }) => {
                assert_eq!(message, INVALID_DATE_FORMAT_MESSAGE);
            }
            other => panic!("Expected InvalidDateFormat for '{input}', got {other:?}"),
        }
    }
}

#[test]
fn given_leap_day_when_parsed_then_accepts_only_leap_years() {
    assert!(parse_iso_date("2024-02-29").is_ok());
    assert!(parse_iso_date("2025-02-29").is_err());
}

/// **VALUE**: Verifies the match is an exact string comparison returning the first hit.
///
/// **BUG THIS CATCHES**: Would catch fuzzy or prefix matching, or returning the last hit.
#[test]
fn given_holiday_list_when_find_holiday_then_returns_first_exact_match() {
    // GIVEN: A list with two entries on the same date
    let holidays = vec![
        holiday("2025-01-01", "New Year's Day"),
        holiday("2025-12-25", "Christmas Day"),
        holiday("2025-12-25", "Second Entry"),
    ];

    // WHEN: Searching for Christmas
    let found = find_holiday(&holidays, "2025-12-25");

    // THEN: The first exact match is returned
    assert_eq!(found.and_then(|h| h.name.as_deref()), Some("Christmas Day"));
}

#[test]
fn given_nameless_entry_first_when_find_holiday_then_skips_to_named_entry() {
    let nameless = ProviderHoliday {
        date: "2025-12-25".to_string(),
        name: Some("  ".to_string()),
        ..ProviderHoliday::default()
    };
    let holidays = vec![
        nameless,
        holiday("2025-12-24", "Christmas Eve"),
        holiday("2025-12-25", "Christmas Day"),
    ];

    let found = find_holiday(&holidays, "2025-12-25");

    assert_eq!(found.and_then(|h| h.display_name()), Some("Christmas Day"));
}

#[test]
fn given_only_nameless_entries_when_find_holiday_then_returns_none() {
    let holidays = vec![ProviderHoliday {
        date: "2025-12-25".to_string(),
        ..ProviderHoliday::default()
    }];

    assert!(find_holiday(&holidays, "2025-12-25").is_none());
}

#[test]
fn given_no_matching_date_when_find_holiday_then_returns_none() {
    let holidays = vec![holiday("2025-12-25", "Christmas Day")];

    assert!(find_holiday(&holidays, "2025-12-24").is_none());
    assert!(find_holiday(&holidays, "2025-12-2").is_none());
    assert!(find_holiday(&[], "2025-12-25").is_none());
}
