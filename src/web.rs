//! HTTP surface of the CO2 lookup.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tracing::instrument;

use crate::error::{CoordinateError, FetchError};
use crate::formatters::format_report;
use crate::geometry::Coordinate;
use crate::models::{CoordinateQuery, ErrorEnvelope, HealthResponse, ResultEnvelope};
use crate::service::StatsService;

/// Failures a request can end with.
#[derive(Debug)]
pub enum ApiError {
    Query(QueryRejection),
    Invalid(CoordinateError),
    Fetch(FetchError),
}

impl From<QueryRejection> for ApiError {
    fn from(e: QueryRejection) -> Self {
        ApiError::Query(e)
    }
}

impl From<CoordinateError> for ApiError {
    fn from(e: CoordinateError) -> Self {
        ApiError::Invalid(e)
    }
}

impl From<FetchError> for ApiError {
    fn from(e: FetchError) -> Self {
        ApiError::Fetch(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            ApiError::Query(e) => (StatusCode::BAD_REQUEST, e.body_text()),
            ApiError::Invalid(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            ApiError::Fetch(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        };
        (status, Json(ErrorEnvelope { error })).into_response()
    }
}

pub fn router(service: StatsService) -> Router {
    Router::new()
        .route("/", get(co2_handler))
        .route("/health", get(health_handler))
        .with_state(service)
}

#[instrument(skip(service))]
pub async fn co2_handler(
    State(service): State<StatsService>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<ResultEnvelope>, ApiError> {
    let Query(pairs) = query?;
    let query = CoordinateQuery::from_pairs(pairs);
    let point = Coordinate::parse(query.latitude.as_deref(), query.longitude.as_deref())
        .inspect_err(|e| tracing::info!("Rejected request: {}", e))?;

    let report = service
        .get_co2_statistics(point)
        .await
        .inspect_err(|e| tracing::error!("Lookup failed: {}", e))?;

    Ok(Json(ResultEnvelope {
        result: format_report(&report),
    }))
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
