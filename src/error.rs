use serde_json::{Value, json};
use thiserror::Error;

/// Crate-level error type.
///
/// Carries a human-readable message plus structured details for machine
/// consumers (the CLI's JSON output). The tracking transform itself never
/// fails; errors come from the validation surfaces around it.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    Config { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn config(message: impl Into<String>, details: Value) -> Self {
        Self::Config {
            message: message.into(),
            details,
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation { .. } => "validation_error",
            AppError::Config { .. } => "config_error",
        }
    }

    pub fn details(&self) -> &Value {
        match self {
            AppError::Validation { details, .. } | AppError::Config { details, .. } => details,
        }
    }

    /// Renders the error as a structured JSON body.
    pub fn to_json(&self) -> Value {
        json!({
            "error": {
                "code": self.code(),
                "message": self.to_string(),
                "details": self.details(),
            }
        })
    }
}
