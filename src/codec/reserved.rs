//! Guard against writing server-managed fields.
//!
//! The server owns `className`, `objectId`, `createdAt`, `updatedAt` and
//! `sessionToken`. Every write path checks user data with [`is_reserved`],
//! either rejecting the payload ([`guard_write_payload`]) or dropping the
//! offending keys ([`strip_reserved`]).

use serde_json::{Map, Value};

use crate::error::{ProtocolError, Result};
use crate::protocol::key;

/// Field names a client must never set directly.
pub const RESERVED_KEYS: [&str; 5] = [
    key::CLASS_NAME,
    key::CREATED_AT,
    key::OBJECT_ID,
    key::UPDATED_AT,
    key::SESSION_TOKEN,
];

/// Check if a field name is reserved.
#[inline]
pub fn is_reserved(field: &str) -> bool {
    RESERVED_KEYS.contains(&field)
}

/// Reject a write payload that sets any reserved field.
///
/// # Errors
///
/// Returns [`ProtocolError::ReservedFieldViolation`] naming the first reserved
/// key in map order.
///
/// # Example
///
/// ```
/// use bmob_protocol::codec::guard_write_payload;
/// use serde_json::json;
///
/// let ok = json!({"score": 1337});
/// assert!(guard_write_payload(ok.as_object().unwrap()).is_ok());
///
/// let bad = json!({"objectId": "abc", "score": 1337});
/// assert!(guard_write_payload(bad.as_object().unwrap()).is_err());
/// ```
pub fn guard_write_payload(fields: &Map<String, Value>) -> Result<()> {
    match fields.keys().find(|field| is_reserved(field)) {
        Some(field) => {
            tracing::debug!(field = %field, "Rejecting write of reserved field");
            Err(ProtocolError::ReservedFieldViolation(field.clone()))
        }
        None => Ok(()),
    }
}

/// Remove reserved fields from a write payload.
pub fn strip_reserved(mut fields: Map<String, Value>) -> Map<String, Value> {
    fields.retain(|field, _| {
        let reserved = is_reserved(field);
        if reserved {
            tracing::debug!(field = %field, "Stripping reserved field from write payload");
        }
        !reserved
    });
    fields
}
