//! Client configuration
//!
//! # Environment variables
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | MEMBERS_BASE_URL | http://localhost:8080/miembros | Resource base URL |
//! | MEMBERS_TIMEOUT_SECS | 30 | Request timeout (seconds) |
//! | MEMBERS_UPDATE_POLICY | full | `full` or `partial` update validation |

use std::fmt;
use std::str::FromStr;

use crate::error::{ClientError, ClientResult};
use crate::http::NetworkHttpClient;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/miembros";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Validation applied to the update form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpdatePolicy {
    /// nombre, apellido and email all required, email format checked
    #[default]
    Full,
    /// At least one text field; empty fields are sent as empty strings
    Partial,
}

impl FromStr for UpdatePolicy {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(Self::Full),
            "partial" => Ok(Self::Partial),
            other => Err(ClientError::Config(format!(
                "unknown update policy '{other}' (expected 'full' or 'partial')"
            ))),
        }
    }
}

impl fmt::Display for UpdatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full => f.write_str("full"),
            Self::Partial => f.write_str("partial"),
        }
    }
}

/// Client configuration for the member backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Resource base URL (e.g., "http://localhost:8080/miembros")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Update form validation
    pub update_policy: UpdatePolicy,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT_SECS,
            update_policy: UpdatePolicy::Full,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Unset or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("MEMBERS_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        let timeout = std::env::var("MEMBERS_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        let update_policy = std::env::var("MEMBERS_UPDATE_POLICY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_default();

        Self {
            base_url,
            timeout,
            update_policy,
        }
    }

    /// Set the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Set the update validation policy
    pub fn with_update_policy(mut self, policy: UpdatePolicy) -> Self {
        self.update_policy = policy;
        self
    }

    /// Create a network HTTP client from this configuration
    pub fn build_http_client(&self) -> ClientResult<NetworkHttpClient> {
        NetworkHttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
