//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // 404 Not Found
            Self::NotFound
            | Self::ClientNotFound
            | Self::OrderNotFound
            | Self::ProductNotFound => StatusCode::NOT_FOUND,

            // 500 Internal Server Error
            Self::InternalError | Self::DatabaseError => StatusCode::INTERNAL_SERVER_ERROR,

            // 400 Bad Request (validation and blocked deletes)
            Self::ValidationFailed
            | Self::InvalidRequest
            | Self::ClientHasOrders
            | Self::ProductHasOrders => StatusCode::BAD_REQUEST,
        }
    }
}
