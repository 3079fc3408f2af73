//! Error types and the error response body

use super::category::ErrorCategory;
use super::codes::ErrorCode;
use chrono::{DateTime, Utc};
use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

/// Application error with structured error code and details
///
/// This is the error type every layer above the store converts into:
/// - Standardized error codes via [`ErrorCode`]
/// - Human-readable messages
/// - Optional structured details (field-level validation messages)
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (field-level errors, context, etc.)
    pub details: Option<BTreeMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    /// Whether this error is a system failure whose text stays internal
    pub fn is_system(&self) -> bool {
        matches!(self.code.category(), ErrorCategory::System)
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Create a database error
    pub fn database(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::DatabaseError, msg)
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<(String, Vec<String>)> = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                let messages = errs
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string())
                    })
                    .collect();
                (field.to_string(), messages)
            })
            .collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        let summary = fields
            .iter()
            .map(|(field, messages)| format!("{field}: {}", messages.join(", ")))
            .collect::<Vec<_>>()
            .join("; ");

        let mut err = AppError::validation(format!("Validation failed: {summary}"));
        for (field, messages) in fields {
            err = err.with_detail(field, messages);
        }
        err
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

/// Error response body
///
/// ```json
/// {
///   "message": "Client not found: 6f1c...",
///   "status": 404,
///   "error": "Not Found",
///   "code": 1001,
///   "timestamp": "2024-05-01T10:00:00Z"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable message (generic for system errors)
    pub message: String,
    /// Numeric HTTP status
    pub status: u16,
    /// HTTP reason phrase
    pub error: String,
    /// Numeric [`ErrorCode`] value
    pub code: u16,
    /// When the error was produced
    pub timestamp: DateTime<Utc>,
    /// Field-level details (validation errors only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<BTreeMap<String, Value>>,
}

impl ErrorBody {
    /// Build the public body for an error, hiding internal text for system errors
    pub fn from_error(err: &AppError) -> Self {
        let status = err.http_status();
        let (message, details) = if err.is_system() {
            (ErrorCode::InternalError.message().to_string(), None)
        } else {
            (err.message.clone(), err.details.clone())
        };
        Self {
            message,
            status: status.as_u16(),
            error: status.canonical_reason().unwrap_or("Unknown").to_string(),
            code: err.code.code(),
            timestamp: Utc::now(),
            details,
        }
    }
}

// ===== Axum Integration =====

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;

        let status = self.http_status();
        let body = ErrorBody::from_error(&self);

        // Internal text never leaves the process, only the log
        if self.is_system() {
            tracing::error!(
                code = %self.code,
                message = %self.message,
                "System error occurred"
            );
        }

        (status, Json(body)).into_response()
    }
}
