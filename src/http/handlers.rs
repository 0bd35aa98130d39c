//! HTTP handlers for the holiday API.
//!
//! Handlers parse path segments themselves so that malformed values produce
//! the `{ "error": ... }` body instead of axum's plain-text rejection.

use axum::{
    extract::{Path, State},
    http::{HeaderName, HeaderValue},
    response::IntoResponse,
    Json,
};
use std::str::FromStr;

use super::dto::HealthResponse;
use super::error::AppError;
use super::state::AppState;
use crate::domain::model::{Country, Lookup};

/// Name of the source that produced a view, or `unavailable`.
pub const HOLIDAY_SOURCE_HEADER: HeaderName = HeaderName::from_static("x-holiday-source");

const UNAVAILABLE: &str = "unavailable";

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

fn parse_segment<T: FromStr>(field: &str, raw: &str) -> Result<T, AppError> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid {}: '{}'", field, raw)))
}

fn parse_country(raw: &str) -> Result<&str, AppError> {
    let country = raw.trim();
    if country.is_empty() {
        return Err(AppError::BadRequest("Missing required parameters".to_string()));
    }
    Ok(country)
}

fn parse_year(raw: &str) -> Result<i32, AppError> {
    let year: i32 = parse_segment("year", raw)?;
    if !(1..=9999).contains(&year) {
        return Err(AppError::BadRequest(format!("Year out of range: {}", year)));
    }
    Ok(year)
}

fn source_header(source: Option<&str>) -> [(HeaderName, HeaderValue); 1] {
    let value = source
        .and_then(|name| HeaderValue::from_str(name).ok())
        .unwrap_or_else(|| HeaderValue::from_static(UNAVAILABLE));
    [(HOLIDAY_SOURCE_HEADER, value)]
}

fn with_source<T: serde::Serialize>(lookup: Lookup<T>) -> impl IntoResponse {
    (source_header(lookup.source.as_deref()), Json(lookup.value))
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        sources: state
            .service
            .source_names()
            .into_iter()
            .map(str::to_string)
            .collect(),
    }))
}

/// GET /api/holidays/{country}/{year}/{month}
pub async fn get_month(
    State(state): State<AppState>,
    Path((country, year, month)): Path<(String, String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let country = parse_country(&country)?;
    let year = parse_year(&year)?;
    let month: u32 = parse_segment("month", &month)?;
    if !(1..=12).contains(&month) {
        return Err(AppError::BadRequest(format!("Month out of range: {}", month)));
    }

    tracing::info!(country, year, month, "month view requested");
    let lookup = state.service.month_view(country, year, month).await;
    Ok(with_source(lookup))
}

/// GET /api/holidays/{country}/{year}/quarter/{quarter}
///
/// A quarter outside 1..=4 is answered with an empty month list.
pub async fn get_quarter(
    State(state): State<AppState>,
    Path((country, year, quarter)): Path<(String, String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let country = parse_country(&country)?;
    let year = parse_year(&year)?;
    let quarter: u32 = parse_segment("quarter", &quarter)?;

    tracing::info!(country, year, quarter, "quarter view requested");
    let lookup = state.service.quarter_view(country, year, quarter).await;
    Ok(with_source(lookup))
}

/// GET /api/holidays/countries
pub async fn list_countries(State(state): State<AppState>) -> HandlerResult<Vec<Country>> {
    match state.service.supported_countries().await {
        Ok(lookup) => Ok(Json(lookup.value)),
        Err(e) => {
            tracing::error!("Error fetching countries: {} ({})", e, e.recovery_suggestion());
            Err(AppError::Internal("Failed to fetch countries".to_string()))
        }
    }
}

/// GET /api/holidays/{country}/{year} with the month left off.
pub async fn missing_parameters() -> AppError {
    AppError::BadRequest("Missing required parameters".to_string())
}

pub async fn not_found() -> AppError {
    AppError::NotFound("Not found".to_string())
}
