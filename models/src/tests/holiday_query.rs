use crate::HolidayQuery;

use chrono::NaiveDate;

#[test]
fn given_query_when_year_requested_then_returns_calendar_year() {
    // GIVEN: A query for Christmas 2025
    let date = NaiveDate::from_ymd_opt(2025, 12, 25).unwrap();
    let query = HolidayQuery::new("2025-12-25", date, "US");

    // THEN: Accessors expose the original inputs and the year
    assert_eq!(query.year(), 2025);
    assert_eq!(query.raw_date(), "2025-12-25");
    assert_eq!(query.date(), date);
    assert_eq!(query.country_code(), "US");
}
