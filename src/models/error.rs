//! Error payloads returned by the products API.

use std::fmt;

use serde::{Deserialize, Serialize};

/// JSON body of a non-2xx response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// Machine-readable code, e.g. `VALIDATION_ERROR`.
    pub error: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<FieldError>,
}

/// Per-field validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Known values of [`ApiErrorBody::error`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorCode {
    Validation,
    Unauthorized,
    NotFound,
    Other(String),
}

impl ErrorCode {
    pub fn as_str(&self) -> &str {
        match self {
            ErrorCode::Validation => "VALIDATION_ERROR",
            ErrorCode::Unauthorized => "UNAUTHORIZED",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::Other(code) => code,
        }
    }

    /// Canonical code for an HTTP status, used when the server sends no
    /// parseable error body.
    pub fn for_status(status: u16) -> Self {
        match status {
            400 => ErrorCode::Validation,
            401 => ErrorCode::Unauthorized,
            404 => ErrorCode::NotFound,
            other => ErrorCode::Other(format!("HTTP_{other}")),
        }
    }
}

impl From<&str> for ErrorCode {
    fn from(s: &str) -> Self {
        match s {
            "VALIDATION_ERROR" => ErrorCode::Validation,
            "UNAUTHORIZED" => ErrorCode::Unauthorized,
            "NOT_FOUND" => ErrorCode::NotFound,
            other => ErrorCode::Other(other.to_string()),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ApiErrorBody {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            error: code.to_string(),
            message: message.into(),
            details: Vec::new(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        ErrorCode::from(self.error.as_str())
    }
}

impl fmt::Display for ApiErrorBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.error, self.message)?;
        for detail in &self.details {
            write!(f, "; {}: {}", detail.field, detail.message)?;
        }
        Ok(())
    }
}
