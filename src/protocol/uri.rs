//! Resource URI construction.
//!
//! Paths are relative to the API version prefix (`/1`); see
//! [`crate::config::ClientConfig::endpoint`] for absolute URLs.
//!
//! Names and IDs are embedded verbatim. Nothing is escaped or validated.
//! An optional ID is the only branch: `Some("")` still selects instance
//! addressing and yields a trailing empty segment.
//!
//! # Example
//!
//! ```
//! use bmob_protocol::protocol::{class_uri, user_uri, Resource};
//!
//! assert_eq!(class_uri("GameScore", None), "/classes/GameScore");
//! assert_eq!(class_uri("GameScore", Some("abc123")), "/classes/GameScore/abc123");
//! assert_eq!(user_uri(None), "/users");
//! assert_eq!(Resource::CloudFunction("hello").uri(), "/functions/hello");
//! ```

use super::constants::{path, API_VERSION_PATH};

/// Discriminant of a [`Resource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// Objects of a user-defined class.
    Object,
    /// Device installations.
    Installation,
    /// Users.
    User,
    /// Stored files.
    File,
    /// Cloud function calls.
    CloudFunction,
    /// Batch submission.
    Batch,
    /// Remote configuration.
    Config,
    /// Push notifications.
    Push,
    /// User login.
    Login,
    /// Password reset request.
    PasswordReset,
}

impl ResourceKind {
    /// Short lowercase name, for logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Object => "object",
            Self::Installation => "installation",
            Self::User => "user",
            Self::File => "file",
            Self::CloudFunction => "cloud_function",
            Self::Batch => "batch",
            Self::Config => "config",
            Self::Push => "push",
            Self::Login => "login",
            Self::PasswordReset => "password_reset",
        }
    }

    /// Whether this kind can address a single instance by ID.
    #[inline]
    pub fn is_addressable(&self) -> bool {
        matches!(self, Self::Object | Self::Installation | Self::User)
    }
}

/// A server resource, by kind plus whatever names it needs.
///
/// `None` for an ID means collection addressing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource<'a> {
    /// Objects of a class: `/classes/{class}[/{id}]`.
    Object {
        /// Class name, embedded verbatim.
        class_name: &'a str,
        /// Instance ID; `None` addresses the class collection.
        object_id: Option<&'a str>,
    },
    /// `/installations[/{id}]`.
    Installation(Option<&'a str>),
    /// `/users[/{id}]`.
    User(Option<&'a str>),
    /// `/files/{name}`.
    File(&'a str),
    /// `/functions/{name}`.
    CloudFunction(&'a str),
    /// `/batch`.
    Batch,
    /// `/config`.
    Config,
    /// `/push`.
    Push,
    /// `/login`.
    Login,
    /// `/requestPasswordReset`.
    PasswordReset,
}

impl Resource<'_> {
    /// Kind of this resource.
    pub fn kind(&self) -> ResourceKind {
        match self {
            Self::Object { .. } => ResourceKind::Object,
            Self::Installation(_) => ResourceKind::Installation,
            Self::User(_) => ResourceKind::User,
            Self::File(_) => ResourceKind::File,
            Self::CloudFunction(_) => ResourceKind::CloudFunction,
            Self::Batch => ResourceKind::Batch,
            Self::Config => ResourceKind::Config,
            Self::Push => ResourceKind::Push,
            Self::Login => ResourceKind::Login,
            Self::PasswordReset => ResourceKind::PasswordReset,
        }
    }

    /// Path of this resource, relative to the API version prefix.
    pub fn uri(&self) -> String {
        match *self {
            Self::Object {
                class_name,
                object_id,
            } => class_uri(class_name, object_id),
            Self::Installation(id) => installation_uri(id),
            Self::User(id) => user_uri(id),
            Self::File(name) => file_uri(name),
            Self::CloudFunction(name) => cloud_function_uri(name),
            Self::Batch => batch_request_uri(),
            Self::Config => config_uri(),
            Self::Push => push_uri(),
            Self::Login => login_uri(),
            Self::PasswordReset => password_reset_uri(),
        }
    }
}

fn collection_or_instance(segment: &str, id: Option<&str>) -> String {
    match id {
        Some(id) => format!("/{}/{}", segment, id),
        None => format!("/{}", segment),
    }
}

/// Remote configuration: `/config`.
#[inline]
pub fn config_uri() -> String {
    format!("/{}", path::CONFIG)
}

/// Class collection or object instance: `/classes/{class}[/{id}]`.
pub fn class_uri(class_name: &str, object_id: Option<&str>) -> String {
    match object_id {
        Some(id) => format!("/{}/{}/{}", path::CLASSES, class_name, id),
        None => format!("/{}/{}", path::CLASSES, class_name),
    }
}

/// Installations: `/installations[/{id}]`.
#[inline]
pub fn installation_uri(object_id: Option<&str>) -> String {
    collection_or_instance(path::INSTALLATIONS, object_id)
}

/// Users: `/users[/{id}]`.
#[inline]
pub fn user_uri(user_id: Option<&str>) -> String {
    collection_or_instance(path::USERS, user_id)
}

/// Stored file: `/files/{name}`.
#[inline]
pub fn file_uri(file_name: &str) -> String {
    format!("/{}/{}", path::FILES, file_name)
}

/// Push notification submission: `/push`.
#[inline]
pub fn push_uri() -> String {
    format!("/{}", path::PUSH)
}

/// Cloud function call: `/functions/{name}`.
#[inline]
pub fn cloud_function_uri(function_name: &str) -> String {
    format!("/{}/{}", path::FUNCTIONS, function_name)
}

/// Batch submission: `/batch`.
#[inline]
pub fn batch_request_uri() -> String {
    format!("/{}", path::BATCH)
}

/// User login: `/login`.
#[inline]
pub fn login_uri() -> String {
    format!("/{}", path::LOGIN)
}

/// Password reset request: `/requestPasswordReset`.
#[inline]
pub fn password_reset_uri() -> String {
    format!("/{}", path::REQUEST_PASSWORD_RESET)
}

/// Path a sub-request carries inside a batch body.
///
/// Unlike top-level requests, batched sub-requests name their target with
/// the version prefix included, e.g. `/1/classes/GameScore`.
pub fn batch_request_path(resource: &Resource<'_>) -> String {
    format!("{}{}", API_VERSION_PATH, resource.uri())
}
