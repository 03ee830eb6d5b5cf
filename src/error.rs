//! Error types for bmob-protocol.

use thiserror::Error;

/// Main error type for all protocol encode/decode operations.
///
/// Server-side error codes (timeout, burst limit, ...) are not represented
/// here; they are data, see [`crate::protocol::ErrorCode`].
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// A `__type`-tagged value is missing a required companion field,
    /// or the field has the wrong JSON type.
    #[error("Malformed {type_tag} value: missing or invalid field `{field}`")]
    MalformedSpecialValue {
        /// The recognized type tag (e.g. `Pointer`).
        type_tag: &'static str,
        /// The companion field that failed validation.
        field: &'static str,
    },

    /// A write payload tried to set a server-managed field.
    #[error("Reserved field `{0}` cannot be written by the client")]
    ReservedFieldViolation(String),

    /// Bytes payload is not valid standard base64.
    #[error("Invalid base64 payload: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    /// Date payload is not a valid ISO-8601 timestamp.
    #[error("Invalid ISO-8601 date: {0}")]
    InvalidDate(#[from] chrono::ParseError),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using ProtocolError.
pub type Result<T> = std::result::Result<T, ProtocolError>;
