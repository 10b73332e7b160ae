//! Shared wiremock fixtures for adapter integration tests
#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use paneboard_domain::GoogleConfig;
use paneboard_infra::{GoogleTokenSource, HttpClient};
use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const ACCESS_TOKEN: &str = "ya29.test-token";

/// Client without retries so failure tests stay fast.
pub fn http() -> HttpClient {
    HttpClient::builder()
        .timeout(Duration::from_secs(5))
        .no_retry()
        .build()
        .expect("http client")
}

/// Mounts a token endpoint that always grants [`ACCESS_TOKEN`].
pub async fn mount_token_endpoint(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/token"))
        .and(body_string_contains("grant_type=refresh_token"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "access_token": ACCESS_TOKEN, "expires_in": 3599 })),
        )
        .mount(server)
        .await;
}

pub fn token_source(server: &MockServer) -> Arc<GoogleTokenSource> {
    let config = GoogleConfig {
        client_id: "client-id".into(),
        client_secret: "client-secret".into(),
        refresh_token: "refresh-token".into(),
        token_url: format!("{}/token", server.uri()),
    };
    Arc::new(GoogleTokenSource::new(http(), &config))
}
