//! Request/response bodies that are not part of the calendar model.

use serde::{Deserialize, Serialize};

/// Body of every 4xx/5xx response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Configured holiday sources in fallback order
    pub sources: Vec<String>,
}
