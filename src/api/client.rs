//! Request/retry engine.
//!
//! # Responsibilities
//! - Issue one logical GET/POST against `base_url + endpoint`
//! - Race each attempt against a per-attempt deadline
//! - Retry timeouts and network errors up to the configured attempt budget
//! - Normalize every outcome into the [`ApiResponse`] envelope
//!
//! # Design Decisions
//! - Non-2xx responses are definitive server answers: mapped, never retried
//! - Retries are immediate, with no backoff between attempts
//! - The deadline is a `tokio::time::timeout` future owned by the attempt,
//!   so concurrent calls cannot interfere with each other's accounting

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tokio::time::timeout;
use url::Url;

use crate::api::envelope::ApiResponse;
use crate::api::error::{status_labels, ClientError};
use crate::config::ClientConfig;

const TIMEOUT_ERROR: &str = "Request timeout";
const TIMEOUT_MESSAGE: &str = "The request took too long to complete. Please try again.";
const NETWORK_ERROR: &str = "Network error";
const NETWORK_MESSAGE: &str =
    "Unable to connect to the server. Please check your internet connection.";

/// HTTP client wrapper enforcing a per-attempt timeout and bounded retries.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    timeout_duration: Duration,
    retry_attempts: u32,
}

impl ApiClient {
    /// Build a client from configuration.
    ///
    /// Validates the base URL and constructs the shared connection pool.
    /// The engine owns the deadline, so the pool itself carries no
    /// client-level timeout.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        Url::parse(&config.base_url).map_err(|source| ClientError::InvalidBaseUrl {
            url: config.base_url.clone(),
            source,
        })?;

        let http = reqwest::Client::builder().build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout_duration: Duration::from_millis(config.timeout_ms),
            // The budget is total attempts; a zero budget would never settle.
            retry_attempts: config.retry_attempts.max(1),
        })
    }

    /// Issue a GET request.
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> ApiResponse<T> {
        self.execute(Method::GET, endpoint, None::<&()>, HeaderMap::new())
            .await
    }

    /// Issue a POST request with an optional JSON body.
    pub async fn post<T, B>(&self, endpoint: &str, body: Option<&B>) -> ApiResponse<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute(Method::POST, endpoint, body, HeaderMap::new())
            .await
    }

    /// Execute one logical request with bounded retries.
    ///
    /// Always settles with an [`ApiResponse`]; timeouts and network errors
    /// are retried immediately until the attempt budget is spent, then
    /// reported through the envelope. A non-2xx status is returned on the
    /// attempt that observed it.
    pub async fn execute<T, B>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
        extra_headers: HeaderMap,
    ) -> ApiResponse<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, endpoint);

        // Caller headers first, default content type last: callers cannot
        // displace the default.
        let mut headers = extra_headers;
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut attempt: u32 = 1;
        loop {
            let mut request = self
                .http
                .request(method.clone(), &url)
                .headers(headers.clone());
            if let Some(body) = body {
                request = request.json(body);
            }

            tracing::debug!(%method, endpoint, attempt, "dispatching request");

            // The deadline future is dropped here on every path, success or
            // failure, so no timer outlives the attempt.
            match timeout(self.timeout_duration, request.send()).await {
                Ok(Ok(response)) => {
                    let status = response.status();
                    match response.json::<Value>().await {
                        Ok(json) if status.is_success() => return parse_success(json),
                        Ok(json) => return error_response(status, &json),
                        Err(err) => {
                            // The backend contract parses the body before
                            // checking status; an unreadable body follows
                            // the network-failure path.
                            if attempt >= self.retry_attempts {
                                return ApiResponse::failure(NETWORK_ERROR, NETWORK_MESSAGE);
                            }
                            tracing::warn!(
                                endpoint,
                                attempt,
                                max_attempts = self.retry_attempts,
                                error = %err,
                                "unreadable response body, retrying"
                            );
                        }
                    }
                }
                Ok(Err(err)) => {
                    if attempt >= self.retry_attempts {
                        return ApiResponse::failure(NETWORK_ERROR, NETWORK_MESSAGE);
                    }
                    tracing::warn!(
                        endpoint,
                        attempt,
                        max_attempts = self.retry_attempts,
                        error = %err,
                        "network error, retrying"
                    );
                }
                Err(_) => {
                    if attempt >= self.retry_attempts {
                        return ApiResponse::failure(TIMEOUT_ERROR, TIMEOUT_MESSAGE);
                    }
                    tracing::warn!(
                        endpoint,
                        attempt,
                        max_attempts = self.retry_attempts,
                        "request timed out, retrying"
                    );
                }
            }

            attempt += 1;
        }
    }

    /// The configured total attempt budget.
    pub fn retry_attempts(&self) -> u32 {
        self.retry_attempts
    }

    /// The configured per-attempt deadline.
    pub fn timeout_duration(&self) -> Duration {
        self.timeout_duration
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout_duration)
            .field("retry_attempts", &self.retry_attempts)
            .finish()
    }
}

/// Deserialize a 2xx body into the typed envelope.
fn parse_success<T: DeserializeOwned>(json: Value) -> ApiResponse<T> {
    match serde_json::from_value::<ApiResponse<T>>(json) {
        Ok(envelope) => envelope,
        Err(err) => ApiResponse::failure(
            "Malformed response",
            format!("The server returned an unexpected payload: {err}"),
        ),
    }
}

/// Map a non-2xx response to a failure envelope.
///
/// Server-supplied `error`/`message` fields take precedence over the
/// per-status fallback labels.
fn error_response<T>(status: StatusCode, body: &Value) -> ApiResponse<T> {
    let (fallback_error, fallback_message) = status_labels(status);
    let error = body
        .get("error")
        .and_then(Value::as_str)
        .unwrap_or(fallback_error);
    let message = body
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or(fallback_message);
    ApiResponse::failure(error, message)
}
