//! # bmob-protocol
//!
//! Wire protocol for the Bmob REST API (a Parse-compatible backend).
//!
//! This crate holds everything a client needs to speak the protocol without
//! doing any I/O itself: the literal header and field names, resource paths,
//! and the extended JSON encodings for special values and field operations.
//! An HTTP transport and an object model sit on top of it.
//!
//! ## Layout
//!
//! - **protocol**: constants, server error codes, resource URIs
//! - **codec**: `__type` values, `__op` operations, reserved-field guard
//! - **config**: credentials, request headers, absolute endpoints
//!
//! ## Example
//!
//! ```
//! use bmob_protocol::codec::{guard_write_payload, FieldOperation, Pointer, SpecialValue};
//! use bmob_protocol::config::ClientConfig;
//! use bmob_protocol::protocol::Resource;
//! use serde_json::json;
//!
//! let config = ClientConfig::new("app-id", "rest-key");
//! let url = config.endpoint(&Resource::Object {
//!     class_name: "GameScore",
//!     object_id: Some("Ed1nuqPvcm"),
//! });
//! assert_eq!(url, "https://api.bmob.cn/1/classes/GameScore/Ed1nuqPvcm");
//!
//! let body = json!({
//!     "score": FieldOperation::increment(10),
//!     "player": SpecialValue::from(Pointer::user("u1")),
//! });
//! guard_write_payload(body.as_object().unwrap()).unwrap();
//! ```

#![warn(missing_docs)]

pub mod codec;
pub mod config;
pub mod error;
pub mod protocol;

pub use codec::{Decoded, FieldOperation, Pointer, SpecialValue};
pub use config::ClientConfig;
pub use error::{ProtocolError, Result};
pub use protocol::{ErrorCode, Resource, ResourceKind};
