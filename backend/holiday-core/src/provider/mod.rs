//! HTTP client for the public-holiday provider.
//!
//! One [`ProviderClient`] is built at start-up and shared by every request;
//! the underlying `reqwest::Client` pools connections and is cheap to clone.

use crate::SERVICE_NAME;
use crate::config::ProviderConfig;
use crate::error::provider::ProviderError;

use common::{ErrorLocation, HttpStatusCode};
use models::ProviderHoliday;

use std::panic::Location;

use log::debug;
use reqwest::Client;
use url::Url;

const USER_AGENT: &str = const_format::concatcp!(SERVICE_NAME, "/", env!("CARGO_PKG_VERSION"));

#[derive(Clone)]
pub struct ProviderClient {
    base_url: Url,
    client: Client,
}

impl ProviderClient {
    /// Build a client for `config.base_url` with the configured timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::UrlParse`] if the base URL is invalid and
    /// [`ProviderError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &ProviderConfig) -> Result<Self, ProviderError> {
        let base_url = Url::parse(&config.base_url)?;

        if base_url.cannot_be_a_base() {
            return Err(ProviderError::UrlParse {
                message: format!("Provider URL cannot be used as a base: {base_url}"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let client = Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.request_timeout())
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `<base_url>/{year}/{country_code}`, tolerating a trailing slash on the base.
    #[track_caller]
    pub fn year_url(&self, year: i32, country_code: &str) -> Result<Url, ProviderError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ProviderError::UrlParse {
                message: format!("Provider URL cannot be used as a base: {}", self.base_url),
                location: ErrorLocation::from(Location::caller()),
            })?
            .pop_if_empty()
            .push(&year.to_string())
            .push(country_code);
        Ok(url)
    }

    /// Fetch every holiday the provider reports for `country_code` in `year`.
    ///
    /// An empty body or a JSON `null` is an empty list.
    ///
    /// # Errors
    ///
    /// - [`ProviderError::Http`] on connection failure or timeout
    /// - [`ProviderError::Status`] on any non-2xx response
    /// - [`ProviderError::Json`] if the body is not a list of holiday records
    pub async fn fetch_year_holidays(
        &self,
        year: i32,
        country_code: &str,
    ) -> Result<Vec<ProviderHoliday>, ProviderError> {
        let url = self.year_url(year, country_code)?;

        debug!("Calling holiday provider: {url}");

        let response = self.client.get(url).send().await?;
        let status = HttpStatusCode::from(response.status().as_u16());

        if !status.is_success() {
            return Err(ProviderError::Status {
                status,
                message: response.text().await.unwrap_or_default(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let body = response.bytes().await?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        let holidays: Option<Vec<ProviderHoliday>> = serde_json::from_slice(&body)?;

        Ok(holidays.unwrap_or_default())
    }
}
