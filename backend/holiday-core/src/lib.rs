pub mod api;
pub mod config;
pub mod error;
pub mod lookup;
pub mod provider;
pub mod validation;

#[cfg(test)]
mod tests;

pub const SERVICE_NAME: &str = "holiday-service";
pub const API_BASE_PATH: &str = "/api/v1/holidays";
pub const CHECK_HOLIDAY_ROUTE: &str = const_format::concatcp!(API_BASE_PATH, "/check");
pub const DEFAULT_PROVIDER_BASE_URL: &str = "https://date.nager.at/api/v3/PublicHolidays";
