use crate::helpers::{
    UNREACHABLE_PROVIDER_URL, mock_provider_url, mount_year, service_for, us_2025_holidays,
    year_path,
};

use holiday_core::error::lookup::LookupError;

use serde_json::json;
use wiremock::matchers::{any, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// check_holiday() - public lookup API
// ============================================================================

/// **VALUE**: Verifies the core scenario: a listed date is reported with its canonical name.
///
/// **WHY THIS MATTERS**: This is the entire purpose of the service.
///
/// **BUG THIS CATCHES**: Would catch a wrong year in the provider URL, a broken match,
/// or `localName` being reported instead of `name`.
#[tokio::test]
async fn given_listed_date_when_check_holiday_then_returns_holiday_with_name() {
    // GIVEN: The provider lists Christmas for US 2025
    let server = MockServer::start().await;
    mount_year(&server, 2025, "US", us_2025_holidays()).await;
    let service = service_for(&mock_provider_url(&server));

    // WHEN: Checking Christmas Day
    let result = service.check_holiday("2025-12-25", "US").await.unwrap();

    // THEN: Holiday with the canonical name, inputs echoed
    assert!(result.is_holiday());
    assert_eq!(result.holiday_name(), Some("Christmas Day"));
    assert_eq!(result.date(), "2025-12-25");
    assert_eq!(result.country_code(), "US");
}

#[tokio::test]
async fn given_unlisted_date_when_check_holiday_then_returns_not_holiday() {
    let server = MockServer::start().await;
    mount_year(&server, 2025, "US", us_2025_holidays()).await;
    let service = service_for(&mock_provider_url(&server));

    let result = service.check_holiday("2025-12-24", "US").await.unwrap();

    assert!(!result.is_holiday());
    assert_eq!(result.holiday_name(), None);
    assert_eq!(result.date(), "2025-12-24");
}

/// **VALUE**: Verifies the canonical name wins over the localized one.
#[tokio::test]
async fn given_localized_record_when_check_holiday_then_reports_canonical_name() {
    let server = MockServer::start().await;
    mount_year(
        &server,
        2025,
        "DE",
        json!([{
            "date": "2025-10-03",
            "localName": "Tag der Deutschen Einheit",
            "name": "German Unity Day",
            "countryCode": "DE",
            "type": "Public"
        }]),
    )
    .await;
    let service = service_for(&mock_provider_url(&server));

    let result = service.check_holiday("2025-10-03", "DE").await.unwrap();

    assert_eq!(result.holiday_name(), Some("German Unity Day"));
}

/// **VALUE**: Verifies a matching record without any name does not produce `isHoliday=true`
/// with an empty name.
///
/// **BUG THIS CATCHES**: Would catch the result invariant being broken by sparse provider data.
#[tokio::test]
async fn given_match_without_names_when_check_holiday_then_returns_not_holiday() {
    let server = MockServer::start().await;
    mount_year(&server, 2025, "US", json!([{ "date": "2025-12-25", "name": "" }])).await;
    let service = service_for(&mock_provider_url(&server));

    let result = service.check_holiday("2025-12-25", "US").await.unwrap();

    assert!(!result.is_holiday());
    assert_eq!(result.holiday_name(), None);
}

/// **VALUE**: Verifies a nameless entry does not hide a named entry for the same date.
///
/// **WHY THIS MATTERS**: The provider can list one date several times (regional or
/// duplicated holidays). A date it lists as a holiday must be answered as a holiday.
///
/// **BUG THIS CATCHES**: Would catch only the first same-date entry being consulted for a name.
#[tokio::test]
async fn given_nameless_entry_before_named_entry_when_check_holiday_then_returns_named_holiday() {
    // GIVEN: Two Christmas entries, the first with blank names
    let server = MockServer::start().await;
    mount_year(
        &server,
        2025,
        "US",
        json!([
            { "date": "2025-12-25", "name": "", "localName": "" },
            { "date": "2025-12-25", "name": "Christmas Day", "localName": "Christmas Day", "countryCode": "US" }
        ]),
    )
    .await;
    let service = service_for(&mock_provider_url(&server));

    // WHEN: Checking Christmas
    let result = service.check_holiday("2025-12-25", "US").await.unwrap();

    // THEN: The named entry answers
    assert!(result.is_holiday());
    assert_eq!(result.holiday_name(), Some("Christmas Day"));
}

/// **VALUE**: Verifies the year is taken from the requested date.
///
/// **BUG THIS CATCHES**: Would catch the current year (or a fixed year) being queried.
#[tokio::test]
async fn given_date_in_other_year_when_check_holiday_then_queries_that_year() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(year_path(1999, "GB")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "date": "1999-12-25", "name": "Christmas Day", "localName": "Christmas Day" }
        ])))
        .expect(1)
        .mount(&server)
        .await;
    let service = service_for(&mock_provider_url(&server));

    let result = service.check_holiday("1999-12-25", "GB").await.unwrap();

    assert!(result.is_holiday());
}

/// **VALUE**: Verifies an invalid date fails before any provider call.
///
/// **WHY THIS MATTERS**: Bad input is a client error (400) and must not cost a network call.
///
/// **BUG THIS CATCHES**: Would catch date parsing moving after the fetch.
#[tokio::test]
async fn given_invalid_date_when_check_holiday_then_fails_without_provider_call() {
    // GIVEN: A provider that must never be called
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;
    let service = service_for(&mock_provider_url(&server));

    // WHEN: Checking an impossible date
    let result = service.check_holiday("2025-13-01", "US").await;

    // THEN: InvalidDateFormat, no provider traffic (verified when the server drops)
    match result {
        Err(LookupError::InvalidDateFormat { message, .. }) => {
            assert!(message.contains("Invalid date format"))
        }
        other => panic!("Expected InvalidDateFormat, got {other:?}"),
    }
}

// ----------------------------------------------------------------------------
// Provider failures are absorbed as "not a holiday"
// ----------------------------------------------------------------------------

/// **VALUE**: Verifies a network failure yields `isHoliday=false` instead of an error.
///
/// **WHY THIS MATTERS**: This is the documented (if debatable) contract of the API:
/// provider outages are masked as negative answers.
///
/// **BUG THIS CATCHES**: Would catch provider errors being propagated to the caller.
#[tokio::test]
async fn given_unreachable_provider_when_check_holiday_then_returns_not_holiday() {
    let service = service_for(UNREACHABLE_PROVIDER_URL);

    let result = service.check_holiday("2025-12-25", "US").await.unwrap();

    assert!(!result.is_holiday());
    assert_eq!(result.holiday_name(), None);
}

#[tokio::test]
async fn given_provider_error_statuses_when_check_holiday_then_returns_not_holiday() {
    for status in [400, 404, 500, 503] {
        let server = MockServer::start().await;
        Mock::given(any())
            .respond_with(ResponseTemplate::new(status))
            .mount(&server)
            .await;
        let service = service_for(&mock_provider_url(&server));

        let result = service.check_holiday("2025-12-25", "US").await.unwrap();

        assert!(!result.is_holiday(), "status {status} should be absorbed");
    }
}

#[tokio::test]
async fn given_malformed_provider_body_when_check_holiday_then_returns_not_holiday() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;
    let service = service_for(&mock_provider_url(&server));

    let result = service.check_holiday("2025-12-25", "US").await.unwrap();

    assert!(!result.is_holiday());
}
