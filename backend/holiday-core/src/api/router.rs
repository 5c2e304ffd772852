use crate::CHECK_HOLIDAY_ROUTE;
use crate::api::handler::check_holiday;
use crate::api::state::ApiState;
use crate::lookup::HolidayService;

use axum::Router;
use axum::http::HeaderValue;
use axum::http::header::ACCESS_CONTROL_ALLOW_ORIGIN;
use axum::middleware::map_response;
use axum::response::Response;
use axum::routing::get;

/// Bind the holiday check route to its handler.
///
/// Every response allows any origin so browser frontends can call the API.
pub fn build_router(service: HolidayService) -> Router {
    Router::new()
        .route(CHECK_HOLIDAY_ROUTE, get(check_holiday))
        .layer(map_response(allow_any_origin))
        .with_state(ApiState::new(service))
}

async fn allow_any_origin(mut response: Response) -> Response {
    response
        .headers_mut()
        .insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    response
}
