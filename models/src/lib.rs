//! Domain models for the holiday service.
//!
//! This crate contains pure data structures representing the core
//! concepts of a holiday check. Models have no business logic - they're
//! just data that can be passed between layers.
//!
//! ## Architecture
//!
//! - **models** (this crate): Pure data structures
//! - **holiday-core**: Validation, provider access and lookup operating on models
//! - **holiday-service**: Application wiring everything together

pub mod check_result;
pub mod error;
pub mod holiday_query;
pub mod provider_holiday;

pub use check_result::HolidayCheckResult;
pub use check_result::builder::HolidayCheckResultBuilder;
pub use error::model_error::ModelError;
pub use holiday_query::HolidayQuery;
pub use provider_holiday::ProviderHoliday;

#[cfg(test)]
mod tests;
