//! OAuth2 refresh-token exchange shared by the Gmail and Calendar adapters

use paneboard_domain::{GoogleConfig, PaneboardError, Result};
use reqwest::Method;
use serde::Deserialize;
use tracing::debug;

use crate::http::HttpClient;

/// Exchanges the configured refresh token for a short-lived access token.
///
/// No caching: every call performs one token request.
pub struct GoogleTokenSource {
    http: HttpClient,
    client_id: String,
    client_secret: String,
    refresh_token: String,
    token_url: String,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<u64>,
}

impl GoogleTokenSource {
    pub fn new(http: HttpClient, config: &GoogleConfig) -> Self {
        Self {
            http,
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            refresh_token: config.refresh_token.clone(),
            token_url: config.token_url.clone(),
        }
    }

    /// Fetch a fresh access token.
    ///
    /// # Errors
    /// `Auth` when the token endpoint rejects the credentials, `Network` for
    /// transport failures.
    pub async fn access_token(&self) -> Result<String> {
        let request = self.http.request(Method::POST, &self.token_url).form(&[
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("refresh_token", self.refresh_token.as_str()),
            ("grant_type", "refresh_token"),
        ]);

        let token: TokenResponse = self.http.send_json(request).await.map_err(|err| match err {
            PaneboardError::InvalidInput(msg) | PaneboardError::NotFound(msg) => {
                PaneboardError::Auth(format!("Token refresh failed: {msg}"))
            }
            other => other,
        })?;

        debug!(expires_in = ?token.expires_in, "Refreshed Google access token");
        Ok(token.access_token)
    }
}
