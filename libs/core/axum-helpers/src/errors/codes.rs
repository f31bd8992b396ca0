//! Type-safe error codes for API responses.
//!
//! Single source of truth for error codes used across the application. Each
//! error code includes:
//! - String representation for client consumption (e.g., "NOT_FOUND")
//! - Integer code for logging and monitoring (e.g., 1004)
//! - Default human-readable message
//!
//! # Example
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::NotFound;
//! assert_eq!(code.as_str(), "NOT_FOUND");
//! assert_eq!(code.code(), 1004);
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standardized error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Invalid UUID format in path or query parameter
    InvalidUuid,

    /// Requested resource was not found
    NotFound,

    /// JSON extraction from request body failed
    JsonExtraction,

    /// Malformed request
    BadRequest,

    // Server errors (1000s)
    /// An unexpected internal server error occurred
    InternalError,

    /// Service is temporarily unavailable
    ServiceUnavailable,

    // Storage errors (2000-2999)
    /// Database connection or query error
    DatabaseError,

    // Serialization / IO (4000-5999)
    /// I/O error
    IoError,

    /// JSON serialization error
    SerdeJsonError,
}

impl ErrorCode {
    /// String identifier sent to clients.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidUuid => "INVALID_UUID",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::JsonExtraction => "JSON_EXTRACTION",
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::InternalError => "INTERNAL_ERROR",
            ErrorCode::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::IoError => "IO_ERROR",
            ErrorCode::SerdeJsonError => "SERDE_JSON_ERROR",
        }
    }

    /// Integer code for logging and monitoring.
    pub fn code(&self) -> i32 {
        match self {
            ErrorCode::InvalidUuid => 1002,
            ErrorCode::JsonExtraction => 1003,
            ErrorCode::NotFound => 1004,
            ErrorCode::InternalError => 1005,
            ErrorCode::BadRequest => 1006,
            ErrorCode::ServiceUnavailable => 1007,
            ErrorCode::DatabaseError => 2003,
            ErrorCode::IoError => 4001,
            ErrorCode::SerdeJsonError => 5001,
        }
    }

    /// Default human-readable message.
    pub fn default_message(&self) -> &'static str {
        match self {
            ErrorCode::InvalidUuid => "Invalid UUID format",
            ErrorCode::NotFound => "Requested resource was not found",
            ErrorCode::JsonExtraction => "Invalid JSON in request body",
            ErrorCode::BadRequest => "Malformed request",
            ErrorCode::InternalError => "An unexpected error occurred",
            ErrorCode::ServiceUnavailable => "Service is temporarily unavailable",
            ErrorCode::DatabaseError => "A database error occurred",
            ErrorCode::IoError => "I/O error",
            ErrorCode::SerdeJsonError => "JSON serialization error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_round_trip() {
        assert_eq!(ErrorCode::NotFound.as_str(), "NOT_FOUND");
        assert_eq!(ErrorCode::NotFound.code(), 1004);
        assert_eq!(ErrorCode::InvalidUuid.as_str(), "INVALID_UUID");
    }

    #[test]
    fn test_error_code_serializes_screaming_snake() {
        let json = serde_json::to_string(&ErrorCode::InvalidUuid).unwrap();
        assert_eq!(json, "\"INVALID_UUID\"");
    }
}
