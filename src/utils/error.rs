use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalendarError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("No holiday source available: {message}")]
    SourceUnavailable { message: String },
}

impl CalendarError {
    /// Short operator-facing hint printed next to the error on startup.
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CalendarError::ApiError(_) => "Check network connectivity and the source endpoint",
            CalendarError::IoError(_) => "Check that the file exists and is readable",
            CalendarError::ConfigError { .. }
            | CalendarError::ConfigValidationError { .. }
            | CalendarError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command-line flags and restart"
            }
            CalendarError::SourceUnavailable { .. } => {
                "Every configured source failed; add a fallback source or retry later"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CalendarError>;
