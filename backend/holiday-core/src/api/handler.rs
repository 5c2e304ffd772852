use crate::api::state::ApiState;
use crate::error::api::ApiError;
use crate::validation::MISSING_PARAMETERS_MESSAGE;

use models::HolidayCheckResult;

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::Uri;
use log::{error, info, warn};
use serde::Deserialize;
use tokio::spawn as TokioSpawn;

/// Raw query parameters. Both are optional so that absence reaches the validator.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckHolidayParams {
    pub date: Option<String>,
    #[serde(rename = "countryCode")]
    pub country_code: Option<String>,
}

/// `GET /api/v1/holidays/check`
///
/// The lookup runs in its own task; if that task panics or is cancelled the
/// caller gets a 500 instead of a dropped connection.
pub(crate) async fn check_holiday(
    State(state): State<ApiState>,
    uri: Uri,
    params: Result<Query<CheckHolidayParams>, QueryRejection>,
) -> Result<Json<HolidayCheckResult>, ApiError> {
    let path = uri.path().to_string();

    let Query(params) = params.map_err(|e| {
        warn!("Rejected malformed query string '{}': {e}", uri.query().unwrap_or_default());
        ApiError::bad_request(MISSING_PARAMETERS_MESSAGE, &path)
    })?;

    let date = params.date.as_deref().unwrap_or_default();
    let country_code = params.country_code.as_deref().unwrap_or_default();

    info!("Received request to check holiday for date: {date} in country: {country_code}");

    let validated = state
        .validator
        .validate(params.date.as_deref(), params.country_code.as_deref())
        .map_err(|e| ApiError::from_validation(e, &path))?;

    let service = Arc::clone(&state.service);
    let lookup_date = validated.date.clone();
    let lookup_country = validated.country_code.clone();

    let outcome =
        TokioSpawn(async move { service.check_holiday(&lookup_date, &lookup_country).await })
            .await;

    match outcome {
        Ok(Ok(result)) => Ok(Json(result)),
        Ok(Err(e)) if e.is_client_error() => {
            warn!(
                "Bad request processed for date '{}', country '{}': {}",
                validated.date,
                validated.country_code,
                e.message()
            );
            Err(ApiError::from_lookup(e, &path))
        }
        Ok(Err(e)) => {
            error!(
                "Internal error processing request for date '{}', country '{}': {e}",
                validated.date, validated.country_code
            );
            Err(ApiError::from_lookup(e, &path))
        }
        Err(join_error) => {
            error!(
                "Lookup task failed for date '{}', country '{}': {join_error}",
                validated.date, validated.country_code
            );
            Err(ApiError::internal(join_error.to_string(), &path))
        }
    }
}
