//! Unified error system for the store service
//!
//! This module provides:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//! - [`ErrorBody`]: The JSON body every failed request answers with
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Client errors
//! - 4xxx: Order errors
//! - 6xxx: Product errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorBody, ErrorCode};
//!
//! let err = AppError::with_message(ErrorCode::ClientNotFound, "Client not found: 42");
//! assert_eq!(err.http_status().as_u16(), 404);
//!
//! let err = AppError::validation("name: must not be blank").with_detail("field", "name");
//! let body = ErrorBody::from_error(&err);
//! assert_eq!(body.status, 400);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult, ErrorBody};
