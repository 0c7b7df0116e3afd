use std::error::Error as StdError;
use thiserror::Error;

/// 對外固定回應的錯誤訊息
pub const CLIENT_FAILURE_MESSAGE: &str = "Bad news, I'm broken";

#[derive(Error, Debug)]
pub enum GeoError {
    #[error("Error {status}")]
    RemoteHttpError { status: u16 },

    #[error("Complete Failure")]
    RemoteTransportError(#[source] reqwest::Error),

    #[error("Geocoding failed: {message}")]
    GeocodeError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Remote,
    Configuration,
    System,
}

impl GeoError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            GeoError::RemoteHttpError { .. }
            | GeoError::RemoteTransportError(_)
            | GeoError::GeocodeError { .. } => ErrorCategory::Remote,
            GeoError::ConfigError { .. }
            | GeoError::ConfigValidationError { .. }
            | GeoError::MissingConfigError { .. }
            | GeoError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            GeoError::IoError(_) => ErrorCategory::System,
        }
    }

    /// Display text followed by every `source()` cause, joined with `: `.
    pub fn detailed_message(&self) -> String {
        let mut message = self.to_string();
        let mut source = self.source();
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        message
    }
}

pub type Result<T> = std::result::Result<T, GeoError>;
