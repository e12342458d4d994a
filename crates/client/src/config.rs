//! Client configuration.

use std::time::Duration;

use crate::error::{Error, Result};

/// Default API host.
pub const DEFAULT_BASE_URL: &str = "https://io.catchpoint.com";

/// Default API version.
pub const DEFAULT_VERSION: u8 = 1;

/// Configuration for [`CatchpointClient`](crate::CatchpointClient).
///
/// Credentials are required; everything else carries a library-side default.
#[derive(Debug, Clone)]
pub struct Config {
    /// API consumer key.
    pub client_id: String,
    /// API consumer secret.
    pub client_secret: String,
    /// Scheme and host of the API, without a trailing slash.
    pub base_url: String,
    /// REST API version.
    pub version: u8,
    /// Per-request timeout; `None` inherits the transport default.
    pub timeout: Option<Duration>,
}

impl Config {
    /// Create a config with the given credentials and default host/version.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            version: DEFAULT_VERSION,
            timeout: None,
        }
    }

    /// Load credentials and host from the environment.
    ///
    /// Reads `CATCHPOINT_CLIENT_ID` and `CATCHPOINT_CLIENT_SECRET`, plus the
    /// optional `CATCHPOINT_URL` override for the API host.
    pub fn from_env() -> Result<Self> {
        let client_id = require_env("CATCHPOINT_CLIENT_ID")?;
        let client_secret = require_env("CATCHPOINT_CLIENT_SECRET")?;
        let mut config = Self::new(client_id, client_secret);
        if let Ok(base_url) = std::env::var("CATCHPOINT_URL") {
            config = config.with_base_url(base_url);
        }
        Ok(config)
    }

    /// Override the API base URL (scheme and host).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Override the API version.
    pub fn with_version(mut self, version: u8) -> Self {
        self.version = version;
        self
    }

    /// Set a request timeout, passed through to the HTTP transport.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Check that both credentials are present.
    pub(crate) fn validate(&self) -> Result<()> {
        if self.client_id.trim().is_empty() {
            return Err(Error::Configuration("client_id must not be empty".into()));
        }
        if self.client_secret.trim().is_empty() {
            return Err(Error::Configuration(
                "client_secret must not be empty".into(),
            ));
        }
        Ok(())
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| Error::Configuration(format!("{key} is not set")))
}
