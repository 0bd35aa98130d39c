//! Application state for the HTTP server.

use crate::core::service::HolidayService;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: HolidayService,
}

impl AppState {
    pub fn new(service: HolidayService) -> Self {
        Self { service }
    }
}
