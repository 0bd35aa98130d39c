//! HTTP server module.
//!
//! Exposes the holiday service as a small read-only REST API:
//!
//! ```text
//! GET /api/holidays/countries
//! GET /api/holidays/{country}/{year}          (400, month missing)
//! GET /api/holidays/{country}/{year}/{month}
//! GET /api/holidays/{country}/{year}/quarter/{quarter}
//! GET /health
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

pub use router::create_router;
pub use server::bind_listener;
pub use state::AppState;
