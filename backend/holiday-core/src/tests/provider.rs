// Unit tests for provider client construction and URL building
// HTTP behaviour against a mock provider is in integration_tests/provider

use crate::config::ProviderConfig;
use crate::error::provider::ProviderError;
use crate::provider::ProviderClient;

fn client_for(base_url: &str) -> Result<ProviderClient, ProviderError> {
    ProviderClient::new(&ProviderConfig {
        base_url: base_url.to_string(),
        ..ProviderConfig::default()
    })
}

/// **VALUE**: Verifies `{year}/{countryCode}` is appended as path segments.
///
/// **WHY THIS MATTERS**: A wrong URL returns 404 from the provider, which the lookup
/// absorbs as "not a holiday" - the bug would be invisible to API callers.
///
/// **BUG THIS CATCHES**: Would catch `Url::join` semantics (which drop the last segment
/// of a base without trailing slash) or double slashes.
#[test]
fn given_base_url_when_year_url_built_then_appends_year_and_country() {
    let client = client_for("https://date.nager.at/api/v3/PublicHolidays").unwrap();

    let url = client.year_url(2025, "US").unwrap();

    assert_eq!(
        url.as_str(),
        "https://date.nager.at/api/v3/PublicHolidays/2025/US"
    );
}

#[test]
fn given_base_url_with_trailing_slash_when_year_url_built_then_no_double_slash() {
    let client = client_for("http://localhost:8000/api/v3/PublicHolidays/").unwrap();

    let url = client.year_url(2024, "GB").unwrap();

    assert_eq!(
        url.as_str(),
        "http://localhost:8000/api/v3/PublicHolidays/2024/GB"
    );
}

#[test]
fn given_unparseable_base_url_when_client_built_then_returns_url_parse_error() {
    let result = client_for("not a url");

    assert!(matches!(result, Err(ProviderError::UrlParse { .. })));
}

#[test]
fn given_non_base_url_when_client_built_then_returns_url_parse_error() {
    let result = client_for("mailto:holidays@example.com");

    assert!(matches!(result, Err(ProviderError::UrlParse { .. })));
}
