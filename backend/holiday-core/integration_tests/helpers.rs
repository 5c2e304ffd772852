//! Test helpers for holiday-core integration tests.
//!
//! - Mock provider setup (wiremock)
//! - Provider client / service construction against the mock
//! - Starting the real HTTP server on an ephemeral port

use holiday_core::api::{HttpServerHandle, build_router, start_http_server};
use holiday_core::config::{ProviderConfig, ServerConfig};
use holiday_core::lookup::HolidayService;
use holiday_core::provider::ProviderClient;

use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Path prefix the mock provider serves, mirroring the public API layout.
pub const PROVIDER_PATH_PREFIX: &str = "/api/v3/PublicHolidays";

/// A port nothing listens on: connections are refused immediately.
pub const UNREACHABLE_PROVIDER_URL: &str = "http://127.0.0.1:1/api/v3/PublicHolidays";

pub fn provider_config(base_url: &str) -> ProviderConfig {
    ProviderConfig {
        base_url: base_url.to_string(),
        connect_timeout_secs: 1,
        request_timeout_secs: 1,
    }
}

pub fn mock_provider_url(server: &MockServer) -> String {
    format!("{}{}", server.uri(), PROVIDER_PATH_PREFIX)
}

pub fn year_path(year: i32, country_code: &str) -> String {
    format!("{PROVIDER_PATH_PREFIX}/{year}/{country_code}")
}

pub fn service_for(base_url: &str) -> HolidayService {
    let client = ProviderClient::new(&provider_config(base_url)).expect("valid provider config");
    HolidayService::new(client)
}

/// A provider list shaped like the real one, including fields we do not model.
pub fn us_2025_holidays() -> Value {
    json!([
        {
            "date": "2025-01-01",
            "localName": "New Year's Day",
            "name": "New Year's Day",
            "countryCode": "US",
            "fixed": false,
            "global": true,
            "counties": null,
            "launchYear": null,
            "types": ["Public"],
            "type": "Public"
        },
        {
            "date": "2025-07-04",
            "localName": "Independence Day",
            "name": "Independence Day",
            "countryCode": "US",
            "fixed": false,
            "global": true,
            "counties": null,
            "launchYear": null,
            "types": ["Public"],
            "type": "Public"
        },
        {
            "date": "2025-12-25",
            "localName": "Christmas Day",
            "name": "Christmas Day",
            "countryCode": "US",
            "fixed": false,
            "global": true,
            "counties": null,
            "launchYear": null,
            "types": ["Public"],
            "type": "Public"
        }
    ])
}

/// Serve `body` for `GET <prefix>/{year}/{country_code}`.
pub async fn mount_year(server: &MockServer, year: i32, country_code: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(year_path(year, country_code)))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Start the full HTTP stack against `provider_base_url` on an ephemeral port.
pub async fn start_service(provider_base_url: &str) -> HttpServerHandle {
    let router = build_router(service_for(provider_base_url));
    let config = ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
    };

    start_http_server(&config, router)
        .await
        .expect("Failed to start HTTP server")
}

/// `GET /api/v1/holidays/check?<query>` against a running server.
pub async fn get_check(handle: &HttpServerHandle, query: &str) -> reqwest::Response {
    let url = format!(
        "{}{}?{}",
        handle.base_url(),
        holiday_core::CHECK_HOLIDAY_ROUTE,
        query
    );

    reqwest::get(&url).await.expect("Failed to call check endpoint")
}
