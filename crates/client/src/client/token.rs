//! OAuth2 client-credentials token handling.
//!
//! Tokens come from `POST {base_url}/ui/api/token` and are reused until
//! shortly before their advertised expiry. The API expects the raw access
//! token base64-encoded inside the `Authorization` header.

use std::time::{Duration, Instant};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::Deserialize;
use tracing::debug;

use super::CatchpointClient;
use crate::error::Result;

/// How long before the advertised expiry a token is treated as stale.
const EXPIRY_MARGIN: Duration = Duration::from_secs(60);

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: u64,
}

/// A cached `Authorization` header value and its refresh deadline.
#[derive(Debug)]
pub(crate) struct CachedToken {
    header: String,
    expires_at: Instant,
}

impl CachedToken {
    fn is_fresh(&self) -> bool {
        Instant::now() < self.expires_at
    }
}

impl CatchpointClient {
    /// The `Authorization` header value for the next request, fetching a
    /// fresh token from the API when the cached one is missing or stale.
    pub(crate) async fn bearer(&self) -> Result<String> {
        let mut cache = self.token.lock().await;
        if let Some(token) = cache.as_ref().filter(|token| token.is_fresh()) {
            return Ok(token.header.clone());
        }

        debug!("requesting a new access token");
        let token = self.fetch_token().await?;
        let header = token.header.clone();
        *cache = Some(token);
        Ok(header)
    }

    async fn fetch_token(&self) -> Result<CachedToken> {
        let url = format!("{}/ui/api/token", self.config.base_url);
        let response = self
            .http
            .post(url)
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", self.config.client_id.as_str()),
                ("client_secret", self.config.client_secret.as_str()),
            ])
            .send()
            .await?;

        let body = self.handle_response(response).await?;
        let token: TokenResponse = serde_json::from_value(body)?;
        debug!(expires_in = token.expires_in, "received access token");

        Ok(CachedToken {
            header: format!("Bearer {}", BASE64.encode(&token.access_token)),
            expires_at: Instant::now()
                + Duration::from_secs(token.expires_in).saturating_sub(EXPIRY_MARGIN),
        })
    }
}
