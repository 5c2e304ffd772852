use crate::helpers::{
    UNREACHABLE_PROVIDER_URL, mock_provider_url, mount_year, provider_config, us_2025_holidays,
    year_path,
};

use holiday_core::error::provider::ProviderError;
use holiday_core::provider::ProviderClient;

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// fetch_year_holidays() against a mock provider
// ============================================================================

/// **VALUE**: Verifies a successful provider response deserializes into holiday records.
///
/// **WHY THIS MATTERS**: This is the only data source of the service; if decoding breaks,
/// every answer silently becomes "not a holiday".
///
/// **BUG THIS CATCHES**: Would catch URL building errors (mock would not match) and
/// decoding failures on unknown fields.
#[tokio::test]
async fn given_provider_list_when_fetch_year_holidays_then_returns_records() {
    // GIVEN: A provider serving the US 2025 list
    let server = MockServer::start().await;
    mount_year(&server, 2025, "US", us_2025_holidays()).await;
    let client = ProviderClient::new(&provider_config(&mock_provider_url(&server))).unwrap();

    // WHEN: Fetching the year
    let holidays = client.fetch_year_holidays(2025, "US").await.unwrap();

    // THEN: All records are returned in order
    assert_eq!(holidays.len(), 3);
    assert_eq!(holidays[2].date, "2025-12-25");
    assert_eq!(holidays[2].name.as_deref(), Some("Christmas Day"));
}

#[tokio::test]
async fn given_outbound_request_when_sent_then_carries_user_agent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(year_path(2025, "US")))
        .and(header_exists("user-agent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;
    let client = ProviderClient::new(&provider_config(&mock_provider_url(&server))).unwrap();

    let holidays = client.fetch_year_holidays(2025, "US").await.unwrap();

    assert!(holidays.is_empty());
}

/// **VALUE**: Verifies non-2xx responses surface as `ProviderError::Status` with the code.
///
/// **WHY THIS MATTERS**: The lookup logs 4xx and other failures differently; it needs the
/// status to tell an unknown country from an outage.
///
/// **BUG THIS CATCHES**: Would catch error statuses being decoded as bodies.
#[tokio::test]
async fn given_provider_404_when_fetch_year_holidays_then_returns_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(year_path(2025, "XX")))
        .respond_with(ResponseTemplate::new(404).set_body_string("Country not found"))
        .mount(&server)
        .await;
    let client = ProviderClient::new(&provider_config(&mock_provider_url(&server))).unwrap();

    let result = client.fetch_year_holidays(2025, "XX").await;

    match result {
        Err(ProviderError::Status {
            status, message, ..
        }) => {
            assert_eq!(status.as_u16(), 404);
            assert!(status.is_client_error());
            assert_eq!(message, "Country not found");
        }
        other => panic!("Expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn given_provider_503_when_fetch_year_holidays_then_returns_server_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    let client = ProviderClient::new(&provider_config(&mock_provider_url(&server))).unwrap();

    let result = client.fetch_year_holidays(2025, "US").await;

    assert!(matches!(
        result,
        Err(ProviderError::Status { status, .. }) if status.is_server_error()
    ));
}

#[tokio::test]
async fn given_malformed_body_when_fetch_year_holidays_then_returns_json_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"not\": \"a list\"}"))
        .mount(&server)
        .await;
    let client = ProviderClient::new(&provider_config(&mock_provider_url(&server))).unwrap();

    let result = client.fetch_year_holidays(2025, "US").await;

    assert!(matches!(result, Err(ProviderError::Json { .. })));
}

/// **VALUE**: Verifies empty and `null` bodies are an empty list, not an error.
///
/// **BUG THIS CATCHES**: Would catch a 204/empty response being treated as malformed.
#[tokio::test]
async fn given_empty_or_null_body_when_fetch_year_holidays_then_returns_empty_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(year_path(2025, "AA")))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(year_path(2025, "BB")))
        .respond_with(ResponseTemplate::new(200).set_body_string("null"))
        .mount(&server)
        .await;
    let client = ProviderClient::new(&provider_config(&mock_provider_url(&server))).unwrap();

    assert!(client.fetch_year_holidays(2025, "AA").await.unwrap().is_empty());
    assert!(client.fetch_year_holidays(2025, "BB").await.unwrap().is_empty());
}

/// **VALUE**: Verifies the configured request timeout bounds a slow provider.
///
/// **WHY THIS MATTERS**: Without a timeout a hung provider would pin every request forever.
///
/// **BUG THIS CATCHES**: Would catch the timeout not being applied to the client.
#[tokio::test]
async fn given_slow_provider_when_fetch_year_holidays_then_times_out_with_http_error() {
    // GIVEN: A provider slower than the 1s request timeout
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(us_2025_holidays())
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;
    let client = ProviderClient::new(&provider_config(&mock_provider_url(&server))).unwrap();

    // WHEN: Fetching
    let result = client.fetch_year_holidays(2025, "US").await;

    // THEN: Http error (timeout)
    assert!(matches!(result, Err(ProviderError::Http { .. })));
}

#[tokio::test]
async fn given_unreachable_provider_when_fetch_year_holidays_then_returns_http_error() {
    let client = ProviderClient::new(&provider_config(UNREACHABLE_PROVIDER_URL)).unwrap();

    let result = client.fetch_year_holidays(2025, "US").await;

    assert!(matches!(result, Err(ProviderError::Http { .. })));
}
