//! Client configuration.
//!
//! Holds the application credentials and host, and derives from them the
//! request headers and absolute endpoint URLs a transport needs.
//!
//! # Example
//!
//! ```
//! use bmob_protocol::config::ClientConfig;
//! use bmob_protocol::protocol::{header, Resource};
//!
//! let config = ClientConfig::new("app-id", "rest-key").with_session_token("r:abc");
//!
//! let headers = config.headers();
//! assert!(headers.contains(&(header::APP_ID, "app-id".to_string())));
//! assert!(headers.contains(&(header::SESSION_TOKEN, "r:abc".to_string())));
//!
//! assert_eq!(
//!     config.endpoint(&Resource::User(Some("u1"))),
//!     "https://api.bmob.cn/1/users/u1"
//! );
//! ```

use serde::Deserialize;

use crate::protocol::{header, Resource, API_VERSION_PATH, HOST};

fn default_host() -> String {
    HOST.to_string()
}

/// Credentials and host for one application.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClientConfig {
    /// Application ID.
    pub application_id: String,
    /// REST API key.
    pub rest_api_key: String,
    /// Master key, for trusted server-side callers.
    #[serde(default)]
    pub master_key: Option<String>,
    /// Session token of the logged-in user.
    #[serde(default)]
    pub session_token: Option<String>,
    /// Scheme and host, without trailing slash.
    #[serde(default = "default_host")]
    pub host: String,
}

impl ClientConfig {
    /// Create a config for the default host.
    pub fn new(application_id: impl Into<String>, rest_api_key: impl Into<String>) -> Self {
        Self {
            application_id: application_id.into(),
            rest_api_key: rest_api_key.into(),
            master_key: None,
            session_token: None,
            host: default_host(),
        }
    }

    /// Set the master key.
    pub fn with_master_key(mut self, master_key: impl Into<String>) -> Self {
        self.master_key = Some(master_key.into());
        self
    }

    /// Set the session token.
    pub fn with_session_token(mut self, session_token: impl Into<String>) -> Self {
        self.session_token = Some(session_token.into());
        self
    }

    /// Override the host (e.g. a self-hosted deployment).
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Headers to attach to every request.
    ///
    /// Application ID and REST key are always present; master key and
    /// session token only when set.
    pub fn headers(&self) -> Vec<(&'static str, String)> {
        let mut headers = vec![
            (header::APP_ID, self.application_id.clone()),
            (header::REST_API_KEY, self.rest_api_key.clone()),
        ];
        if let Some(master_key) = &self.master_key {
            headers.push((header::MASTER_KEY, master_key.clone()));
        }
        if let Some(session_token) = &self.session_token {
            headers.push((header::SESSION_TOKEN, session_token.clone()));
        }
        headers
    }

    /// Absolute URL of a resource: host, version prefix, resource path.
    pub fn endpoint(&self, resource: &Resource<'_>) -> String {
        let uri = resource.uri();
        tracing::trace!(kind = resource.kind().as_str(), %uri, "Resolved endpoint");
        format!("{}{}{}", self.host.trim_end_matches('/'), API_VERSION_PATH, uri)
    }
}
