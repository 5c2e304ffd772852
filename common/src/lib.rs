//! Shared building blocks for the holiday service workspace.
//!
//! ## Architecture
//!
//! - **common** (this crate): error plumbing shared by every layer
//! - **models**: pure data structures (queries, provider records, results)
//! - **holiday-core**: validation, provider client, lookup and HTTP API
//! - **holiday-service**: binary wiring everything together
//!
//! Nothing in here knows about holidays; it only gives the other crates a
//! uniform way to say *where* an error happened and *what kind* of HTTP
//! status they got back.

pub mod error;
pub mod http_status;

pub use error::error_location::ErrorLocation;
pub use http_status::HttpStatusCode;

#[cfg(test)]
mod tests;
