//! HTTP client for the Catchpoint API.

pub mod favorites;
pub mod nodes;
pub mod performance;
mod token;

use std::sync::Arc;

use reqwest::header;
use serde::Serialize;
use serde_json::Value;
use tokio::sync::Mutex;
use tracing::debug;

use crate::config::Config;
use crate::error::{Error, Result};
use token::CachedToken;

/// HTTP client for the Catchpoint pull API.
///
/// Operations take `&self` and the client is cheap to clone; clones share
/// the underlying connection pool and the token cache.
#[derive(Debug, Clone)]
pub struct CatchpointClient {
    http: reqwest::Client,
    config: Config,
    token: Arc<Mutex<Option<CachedToken>>>,
}

impl CatchpointClient {
    /// Create a new client from a configuration.
    ///
    /// Fails with [`Error::Configuration`] when a credential is missing or
    /// empty; no network traffic happens here.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            config,
            token: Arc::new(Mutex::new(None)),
        })
    }

    /// Create a client from the environment (see [`Config::from_env`]).
    pub fn from_env() -> Result<Self> {
        Self::new(Config::from_env()?)
    }

    /// The configured API base URL.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Build the full URL for a versioned API path.
    fn api_url(&self, path: &str) -> String {
        format!(
            "{}/ui/api/v{}/{}",
            self.config.base_url, self.config.version, path
        )
    }

    /// Issue an authenticated GET against an API path.
    pub(crate) async fn get(&self, path: &str) -> Result<Value> {
        debug!(path, "issuing GET");
        self.send(self.http.get(self.api_url(path))).await
    }

    /// Issue an authenticated GET with query parameters.
    pub(crate) async fn get_query<Q>(&self, path: &str, query: &Q) -> Result<Value>
    where
        Q: Serialize + ?Sized,
    {
        debug!(path, "issuing GET");
        self.send(self.http.get(self.api_url(path)).query(query))
            .await
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Value> {
        let request = request.header(header::AUTHORIZATION, self.bearer().await?);
        self.handle_response(request.send().await?).await
    }

    /// Decode a response body, mapping non-2xx statuses to transport errors.
    async fn handle_response(&self, response: reqwest::Response) -> Result<Value> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(Error::Transport {
                status: status.as_u16(),
                body,
            });
        }
        serde_json::from_str(&body).map_err(Error::from)
    }
}

/// Check a required identifier before building a request.
pub(crate) fn require_id<'a>(name: &str, value: &'a str) -> Result<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(Error::InvalidArgument(format!("{name} is required")));
    }
    Ok(value)
}

/// Chart query parameters, in the wire's camelCase names. Absent fields are
/// omitted from the query string entirely.
#[derive(Debug, Default, Serialize)]
pub(crate) struct ChartParams {
    #[serde(rename = "startTime", skip_serializing_if = "Option::is_none")]
    pub(crate) start_time: Option<String>,
    #[serde(rename = "endTime", skip_serializing_if = "Option::is_none")]
    pub(crate) end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) tests: Option<String>,
}
