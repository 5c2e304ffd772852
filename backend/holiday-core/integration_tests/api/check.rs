use crate::helpers::{
    UNREACHABLE_PROVIDER_URL, get_check, mock_provider_url, mount_year, start_service,
    us_2025_holidays,
};

use holiday_core::CHECK_HOLIDAY_ROUTE;
use holiday_core::error::api::ErrorBody;
use holiday_core::lookup::INVALID_DATE_FORMAT_MESSAGE;
use holiday_core::validation::{INVALID_COUNTRY_CODE_MESSAGE, MISSING_PARAMETERS_MESSAGE};

use models::HolidayCheckResult;

use serde_json::{Value, json};
use wiremock::matchers::any;
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mock provider that fails the test (on drop) if it receives any request.
async fn provider_expecting_no_calls() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;
    server
}

// ============================================================================
// 200 responses
// ============================================================================

/// **VALUE**: End-to-end check of the main scenario through the real HTTP stack.
///
/// **WHY THIS MATTERS**: Verifies route binding, query extraction, lookup and JSON contract
/// together, exactly as an API consumer sees them.
///
/// **BUG THIS CATCHES**: Would catch a wrong route string, a renamed query parameter, or a
/// change in response field names.
#[tokio::test]
async fn given_christmas_us_when_checked_then_returns_holiday_json() {
    // GIVEN: Provider lists Christmas for US 2025 and the service is running
    let provider = MockServer::start().await;
    mount_year(&provider, 2025, "US", us_2025_holidays()).await;
    let handle = start_service(&mock_provider_url(&provider)).await;

    // WHEN: Calling the endpoint
    let response = get_check(&handle, "date=2025-12-25&countryCode=US").await;

    // THEN: 200 with the exact contract
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "date": "2025-12-25",
            "countryCode": "US",
            "isHoliday": true,
            "holidayName": "Christmas Day"
        })
    );
}

#[tokio::test]
async fn given_unlisted_date_when_checked_then_returns_not_holiday_with_null_name() {
    let provider = MockServer::start().await;
    mount_year(&provider, 2025, "US", us_2025_holidays()).await;
    let handle = start_service(&mock_provider_url(&provider)).await;

    let response = get_check(&handle, "date=2025-12-24&countryCode=US").await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["isHoliday"], json!(false));
    assert!(body["holidayName"].is_null());
    assert_eq!(body["date"], "2025-12-24");
    assert_eq!(body["countryCode"], "US");
}

/// **VALUE**: Verifies a lowercase country code is uppercased for both provider and response.
///
/// **BUG THIS CATCHES**: Would catch the provider being called with `us` (the mock
/// only answers `/US`, so the answer would become "not a holiday").
#[tokio::test]
async fn given_lowercase_country_code_when_checked_then_echoes_uppercase() {
    let provider = MockServer::start().await;
    mount_year(&provider, 2025, "US", us_2025_holidays()).await;
    let handle = start_service(&mock_provider_url(&provider)).await;

    let response = get_check(&handle, "date=2025-07-04&countryCode=us").await;

    let result: HolidayCheckResult = response.json().await.unwrap();
    assert_eq!(result.country_code(), "US");
    assert!(result.is_holiday());
    assert_eq!(result.holiday_name(), Some("Independence Day"));
}

/// **VALUE**: Verifies a provider outage still answers 200 / `isHoliday: false`.
///
/// **WHY THIS MATTERS**: This is the documented absorbed-failure contract; turning it into a
/// 5xx would change the API's observable behaviour.
///
/// **BUG THIS CATCHES**: Would catch provider errors leaking into the HTTP layer.
#[tokio::test]
async fn given_unreachable_provider_when_checked_then_returns_200_not_holiday() {
    let handle = start_service(UNREACHABLE_PROVIDER_URL).await;

    let response = get_check(&handle, "date=2025-12-25&countryCode=US").await;

    assert_eq!(response.status(), 200);
    let result: HolidayCheckResult = response.json().await.unwrap();
    assert!(!result.is_holiday());
    assert_eq!(result.holiday_name(), None);
}

#[tokio::test]
async fn given_response_when_returned_then_allows_any_origin() {
    let provider = MockServer::start().await;
    mount_year(&provider, 2025, "US", us_2025_holidays()).await;
    let handle = start_service(&mock_provider_url(&provider)).await;

    let ok = get_check(&handle, "date=2025-12-25&countryCode=US").await;
    let bad = get_check(&handle, "date=2025-12-25").await;

    for response in [ok, bad] {
        assert_eq!(
            response
                .headers()
                .get("access-control-allow-origin")
                .and_then(|v| v.to_str().ok()),
            Some("*")
        );
    }
}

// ============================================================================
// 400 responses
// ============================================================================

/// **VALUE**: Verifies each missing/blank parameter combination is a 400 with no provider call.
///
/// **WHY THIS MATTERS**: Validation must happen before any network activity.
///
/// **BUG THIS CATCHES**: Would catch absent parameters reaching the lookup, or axum's own
/// query rejection text leaking out instead of the documented message.
#[tokio::test]
async fn given_missing_or_blank_params_when_checked_then_returns_400() {
    // GIVEN: A provider that must not be called
    let provider = provider_expecting_no_calls().await;
    let handle = start_service(&mock_provider_url(&provider)).await;

    for query in [
        "",
        "date=2025-12-25",
        "countryCode=US",
        "date=&countryCode=US",
        "date=2025-12-25&countryCode=%20%20",
        "countryCode=USA",
    ] {
        // WHEN: Calling with incomplete parameters
        let response = get_check(&handle, query).await;

        // THEN: 400 with the missing-parameter message
        assert_eq!(response.status(), 400, "query '{query}'");
        let body: ErrorBody = response.json().await.unwrap();
        assert_eq!(body.status, 400);
        assert_eq!(body.error, "Bad Request");
        assert_eq!(body.message, MISSING_PARAMETERS_MESSAGE, "query '{query}'");
        assert_eq!(body.path, CHECK_HOLIDAY_ROUTE);
    }
}

#[tokio::test]
async fn given_wrong_length_country_code_when_checked_then_returns_400() {
    let provider = provider_expecting_no_calls().await;
    let handle = start_service(&mock_provider_url(&provider)).await;

    for country_code in ["U", "USA"] {
        let response = get_check(&handle, &format!("date=2025-12-25&countryCode={country_code}")).await;

        assert_eq!(response.status(), 400);
        let body: ErrorBody = response.json().await.unwrap();
        assert_eq!(body.message, INVALID_COUNTRY_CODE_MESSAGE);
    }
}

/// **VALUE**: Verifies `2025-13-01` is a 400 "Invalid date format", not a 500 or a 200.
#[tokio::test]
async fn given_invalid_calendar_date_when_checked_then_returns_400_invalid_date_format() {
    let provider = provider_expecting_no_calls().await;
    let handle = start_service(&mock_provider_url(&provider)).await;

    let response = get_check(&handle, "date=2025-13-01&countryCode=US").await;

    assert_eq!(response.status(), 400);
    let body: ErrorBody = response.json().await.unwrap();
    assert_eq!(body.message, INVALID_DATE_FORMAT_MESSAGE);
    assert!(body.message.starts_with("Invalid date format"));
}

#[tokio::test]
async fn given_duplicate_query_keys_when_checked_then_returns_400() {
    let provider = provider_expecting_no_calls().await;
    let handle = start_service(&mock_provider_url(&provider)).await;

    let response = get_check(&handle, "date=2025-12-25&date=2025-12-26&countryCode=US").await;

    assert_eq!(response.status(), 400);
}

// ============================================================================
// Routing and lifecycle
// ============================================================================

#[tokio::test]
async fn given_unknown_route_when_requested_then_returns_404() {
    let provider = provider_expecting_no_calls().await;
    let handle = start_service(&mock_provider_url(&provider)).await;

    let response = reqwest::get(format!("{}/api/v1/holidays", handle.base_url()))
        .await
        .unwrap();

    assert_eq!(response.status(), 404);
}

/// **VALUE**: Verifies concurrent requests are served independently.
///
/// **BUG THIS CATCHES**: Would catch shared mutable state or serialisation across requests.
#[tokio::test]
async fn given_concurrent_requests_when_checked_then_each_gets_its_own_answer() {
    let provider = MockServer::start().await;
    mount_year(&provider, 2025, "US", us_2025_holidays()).await;
    let handle = start_service(&mock_provider_url(&provider)).await;

    let dates = ["2025-01-01", "2025-01-02", "2025-07-04", "2025-12-25"];
    let responses = futures_join(&handle, &dates).await;

    let holidays: Vec<bool> = responses.iter().map(|r| r.is_holiday()).collect();
    assert_eq!(holidays, vec![true, false, true, true]);
    for (result, date) in responses.iter().zip(dates) {
        assert_eq!(result.date(), date);
    }
}

async fn futures_join(
    handle: &holiday_core::api::HttpServerHandle,
    dates: &[&str],
) -> Vec<HolidayCheckResult> {
    let tasks: Vec<_> = dates
        .iter()
        .map(|date| {
            let url = format!(
                "{}{}?date={}&countryCode=US",
                handle.base_url(),
                CHECK_HOLIDAY_ROUTE,
                date
            );
            tokio::spawn(async move {
                reqwest::get(&url)
                    .await
                    .unwrap()
                    .json::<HolidayCheckResult>()
                    .await
                    .unwrap()
            })
        })
        .collect();

    let mut results = Vec::with_capacity(tasks.len());
    for task in tasks {
        results.push(task.await.unwrap());
    }
    results
}

#[tokio::test]
async fn given_running_server_when_shutdown_then_stops_accepting_requests() {
    let provider = provider_expecting_no_calls().await;
    let handle = start_service(&mock_provider_url(&provider)).await;
    let base_url = handle.base_url();

    handle.shutdown().await.unwrap();

    let result = reqwest::get(format!("{base_url}{CHECK_HOLIDAY_ROUTE}")).await;
    assert!(result.is_err(), "Server should refuse connections after shutdown");
}
