//! Numeric error codes returned by the server.
//!
//! Failed requests carry a JSON body of the form
//! `{"code": 101, "error": "object not found for get"}`. The codes are
//! plain data for the transport layer to interpret; nothing in this crate
//! retries or raises on them.
//!
//! # Example
//!
//! ```
//! use bmob_protocol::protocol::{ErrorCode, ServerError};
//!
//! let err = ServerError::from_slice(br#"{"code":155,"error":"burst limit"}"#).unwrap();
//! assert_eq!(err.kind(), ErrorCode::ExceededBurstLimit);
//! assert!(err.kind().is_transient());
//! ```

use serde::Deserialize;

use crate::error::Result;

/// Internal server error.
pub const INTERNAL: i64 = 1;

/// Object lookup by ID found nothing.
pub const OBJECT_NOT_FOUND_FOR_GET: i64 = 101;

/// Request timed out on the server.
pub const TIMEOUT: i64 = 124;

/// Request rate exceeded the application's burst limit.
pub const EXCEEDED_BURST_LIMIT: i64 = 155;

/// Known server error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Code 1.
    Internal,
    /// Code 101.
    ObjectNotFoundForGet,
    /// Code 124.
    Timeout,
    /// Code 155.
    ExceededBurstLimit,
    /// Any code this crate has no name for.
    Other(i64),
}

impl ErrorCode {
    /// Map a numeric code to its variant.
    pub fn from_code(code: i64) -> Self {
        match code {
            INTERNAL => Self::Internal,
            OBJECT_NOT_FOUND_FOR_GET => Self::ObjectNotFoundForGet,
            TIMEOUT => Self::Timeout,
            EXCEEDED_BURST_LIMIT => Self::ExceededBurstLimit,
            other => Self::Other(other),
        }
    }

    /// Numeric value as sent on the wire.
    pub fn code(&self) -> i64 {
        match self {
            Self::Internal => INTERNAL,
            Self::ObjectNotFoundForGet => OBJECT_NOT_FOUND_FOR_GET,
            Self::Timeout => TIMEOUT,
            Self::ExceededBurstLimit => EXCEEDED_BURST_LIMIT,
            Self::Other(code) => *code,
        }
    }

    /// Whether a caller may reasonably retry the same request.
    ///
    /// True for timeout and burst limit only.
    #[inline]
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Timeout | Self::ExceededBurstLimit)
    }
}

impl From<i64> for ErrorCode {
    fn from(code: i64) -> Self {
        Self::from_code(code)
    }
}

/// Error body returned by the server on a failed request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerError {
    /// Numeric error code.
    pub code: i64,
    /// Human-readable message.
    #[serde(default)]
    pub error: String,
}

impl ServerError {
    /// Parse an error body from raw response bytes.
    ///
    /// # Errors
    ///
    /// Returns error if the bytes are not a JSON object with a numeric `code`.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Typed view of `code`.
    #[inline]
    pub fn kind(&self) -> ErrorCode {
        ErrorCode::from_code(self.code)
    }
}

impl std::fmt::Display for ServerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "server error {}: {}", self.code, self.error)
    }
}
