//! Protocol module - constant registry, error codes and resource URIs.
//!
//! This module holds everything about the REST API that is fixed:
//! - Header names, JSON keys, type and operator tags ([`constants`])
//! - Server error codes ([`error_code`])
//! - Resource paths, including the batch endpoint ([`uri`])

pub mod constants;
pub mod error_code;
mod uri;

pub use constants::{class, header, key, op, path, type_tag, API_VERSION_PATH, HOST};
pub use error_code::{ErrorCode, ServerError};
pub use uri::{
    batch_request_path, batch_request_uri, class_uri, cloud_function_uri, config_uri, file_uri,
    installation_uri, login_uri, password_reset_uri, push_uri, user_uri, Resource, ResourceKind,
};
