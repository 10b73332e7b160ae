use std::time::Duration;

use paneboard_common::resilience::policies::PredicateRetry;
use paneboard_common::{RetryConfig, RetryError, RetryExecutor};
use paneboard_domain::PaneboardError;
use reqwest::{Client as ReqwestClient, Method, Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::errors::{status_error, InfraError};

/// reqwest client shared by the collaborator adapters.
///
/// Only replayable methods (`GET`, `HEAD`, `PUT`, `DELETE`, `OPTIONS`) are
/// retried, under the configured [`RetryConfig`]. `POST` and `PATCH` go out
/// exactly once: sending mail, inserting rows, refreshing tokens and asking
/// for completions must never be duplicated by the transport.
#[derive(Clone)]
pub struct HttpClient {
    client: ReqwestClient,
    retry: RetryConfig,
}

/// Why a single attempt did not produce a usable response
#[derive(Debug)]
enum AttemptFailure {
    /// 5xx response, kept so the caller can still read it once retries end
    ServerError(Response),
    Transport(reqwest::Error),
    Unclonable,
}

impl AttemptFailure {
    fn is_transient(&self) -> bool {
        match self {
            Self::ServerError(_) => true,
            Self::Transport(err) => err.is_timeout() || err.is_connect() || err.is_request(),
            Self::Unclonable => false,
        }
    }
}

impl HttpClient {
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Client with default timeout and retry settings.
    pub fn new() -> Result<Self, PaneboardError> {
        Self::builder().build()
    }

    pub fn request<U>(&self, method: Method, url: U) -> RequestBuilder
    where
        U: reqwest::IntoUrl,
    {
        self.client.request(method, url)
    }

    /// Send a request and return whatever response arrives last.
    ///
    /// A 5xx on the final attempt is returned as a response, not an error;
    /// only transport failures become `Err`.
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response, PaneboardError> {
        let request = builder.build().map_err(transport_error)?;
        let config =
            if is_replayable(request.method()) { self.retry.clone() } else { RetryConfig::none() };

        let policy = PredicateRetry::new(|failure: &AttemptFailure, _attempt: u32| {
            failure.is_transient()
        });
        let result = RetryExecutor::new(config, policy).execute(|| self.attempt(&request)).await;

        match result.map_err(RetryError::into_inner) {
            Ok(response) | Err(AttemptFailure::ServerError(response)) => Ok(response),
            Err(AttemptFailure::Transport(err)) => Err(transport_error(err)),
            Err(AttemptFailure::Unclonable) => Err(PaneboardError::Internal(
                "request body cannot be replayed; buffer the body before sending".into(),
            )),
        }
    }

    /// Like [`send`](Self::send), but non-success statuses become domain
    /// errors carrying the response body.
    pub async fn send_checked(&self, builder: RequestBuilder) -> Result<Response, PaneboardError> {
        let response = self.send(builder).await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(status_error(status, &body))
    }

    /// Send, check the status, and decode a JSON body.
    pub async fn send_json<T>(&self, builder: RequestBuilder) -> Result<T, PaneboardError>
    where
        T: DeserializeOwned,
    {
        let response = self.send_checked(builder).await?;
        response.json::<T>().await.map_err(|err| {
            PaneboardError::Internal(format!("failed to decode response body: {err}"))
        })
    }

    async fn attempt(&self, request: &Request) -> Result<Response, AttemptFailure> {
        let request = request.try_clone().ok_or(AttemptFailure::Unclonable)?;
        let method = request.method().clone();
        let url = request.url().clone();

        match self.client.execute(request).await {
            Ok(response) => {
                let status = response.status();
                debug!(%method, %url, %status, "collaborator responded");
                if status.is_server_error() {
                    Err(AttemptFailure::ServerError(response))
                } else {
                    Ok(response)
                }
            }
            Err(err) => {
                debug!(%method, %url, error = %err, "collaborator request failed");
                Err(AttemptFailure::Transport(err))
            }
        }
    }
}

fn is_replayable(method: &Method) -> bool {
    [Method::GET, Method::HEAD, Method::PUT, Method::DELETE, Method::OPTIONS].contains(method)
}

fn transport_error(err: reqwest::Error) -> PaneboardError {
    InfraError::from(err).into()
}

/// Builder for [`HttpClient`].
#[derive(Debug)]
pub struct HttpClientBuilder {
    timeout: Duration,
    retry: RetryConfig,
    user_agent: String,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            retry: RetryConfig::builder()
                .max_retries(2)
                .exponential_backoff(Duration::from_millis(200), 2.0, Duration::from_secs(5))
                .build()
                .unwrap_or_default(),
            user_agent: concat!("paneboard/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl HttpClientBuilder {
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Retry schedule for replayable requests.
    pub fn retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Every request goes out once. For adapters whose callers own retries.
    pub fn no_retry(self) -> Self {
        self.retry(RetryConfig::none())
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    pub fn build(self) -> Result<HttpClient, PaneboardError> {
        let client = ReqwestClient::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent)
            .no_proxy()
            .build()
            .map_err(transport_error)?;

        Ok(HttpClient { client, retry: self.retry })
    }
}
