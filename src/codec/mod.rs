//! Codec module - extended JSON values and field operations.
//!
//! This module converts between native values and the server's JSON forms:
//!
//! - [`SpecialValue`] / [`Pointer`] - values tagged with `__type`
//! - [`FieldOperation`] - mutations tagged with `__op`
//! - [`guard_write_payload`] / [`strip_reserved`] - keep server-managed fields out of writes
//!
//! # Design
//!
//! The two tag namespaces never mix. Decoding a special value only looks at
//! `__type`; encoding an operation only ever sets `__op`.
//!
//! # Example
//!
//! ```
//! use bmob_protocol::codec::{FieldOperation, SpecialValue};
//! use serde_json::json;
//!
//! let update = json!({
//!     "score": FieldOperation::increment(1),
//!     "location": SpecialValue::geo_point(39.9, 116.4).unwrap(),
//! });
//! assert_eq!(update["score"]["__op"], "Increment");
//! assert_eq!(update["location"]["__type"], "GeoPoint");
//! ```

mod operation;
mod reserved;
mod special;

pub use operation::FieldOperation;
pub use reserved::{guard_write_payload, is_reserved, strip_reserved, RESERVED_KEYS};
pub use special::{Decoded, Pointer, SpecialValue};
