//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, tracing, panic
//! recovery), and creates the axum router ready for serving.

use axum::{routing::get, Router};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::error::panic_response;
use super::handlers::{self, HOLIDAY_SOURCE_HEADER};
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // The calendar front-end is served from a different origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .expose_headers([HOLIDAY_SOURCE_HEADER]);

    let holidays = Router::new()
        .route("/countries", get(handlers::list_countries))
        .route("/{country}/{year}", get(handlers::missing_parameters))
        .route("/{country}/{year}/{month}", get(handlers::get_month))
        .route("/{country}/{year}/quarter/{quarter}", get(handlers::get_quarter));

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api/holidays", holidays)
        .fallback(handlers::not_found)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
