//! HTTP API for the holiday check.
//!
//! Exposes a single route:
//!
//! - `GET /api/v1/holidays/check?date=YYYY-MM-DD&countryCode=XX`
//!
//! The handler stays thin: it validates parameters with [`RequestValidator`],
//! delegates to [`HolidayService`] and maps errors onto status codes.
//!
//! # Responses
//!
//! - `200` - `{date, countryCode, isHoliday, holidayName}`
//! - `400` - missing/blank parameters, wrong country code length, bad date
//! - `500` - unexpected failure while processing (details only in the logs)
//!
//! Provider outages are not errors here: the lookup absorbs them and answers
//! `isHoliday: false`.
//!
//! [`RequestValidator`]: crate::validation::RequestValidator
//! [`HolidayService`]: crate::lookup::HolidayService

mod handle;
mod handler;
mod router;
mod server;
mod state;

pub use handle::HttpServerHandle;
pub use handler::CheckHolidayParams;
pub use router::build_router;
pub use server::start_http_server;
pub use state::ApiState;
