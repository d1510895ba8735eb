//! HTTP client for the escrow marketplace admin API.
//!
//! Every endpoint wraps its payload in a `{ data, meta?, traceId? }`
//! envelope on success and `{ data: null, error: { code, message },
//! traceId? }` on failure. The client unwraps both, turns any non-2xx
//! response into [`ClientError::Api`] and never retries on its own.

mod auth;
mod kyc;
mod transactions;
mod users;

pub use transactions::TransactionSearchParams;

use failsafe::futures::CircuitBreaker as FuturesCircuitBreaker;
use failsafe::{backoff, failure_policy, Config, Error as FailsafeError, StateMachine};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("admin API error {status} [{code}]: {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
        trace_id: Option<String>,
    },
    #[error("invalid response from admin API: {0}")]
    InvalidResponse(String),
    #[error("admin API circuit breaker is open")]
    CircuitOpen,
}

// Success envelopes also carry meta/traceId; only data matters here.
#[derive(Debug, Deserialize)]
struct ApiEnvelope<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
    #[serde(default)]
    trace_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    code: String,
    message: String,
}

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Typed client for the admin API.
#[derive(Clone)]
pub struct AdminApiClient {
    client: Client,
    base_url: String,
    access_token: Option<String>,
    circuit_breaker: StateMachine<failure_policy::ConsecutiveFailures<backoff::EqualJittered>, ()>,
}

impl AdminApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT_SECS)
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .unwrap_or_default();

        let backoff = backoff::equal_jittered(Duration::from_secs(60), Duration::from_secs(120));
        let policy = failure_policy::consecutive_failures(3, backoff);
        let circuit_breaker = Config::new().failure_policy(policy).build();

        AdminApiClient {
            client,
            base_url: base_url.into(),
            access_token: None,
            circuit_breaker,
        }
    }

    /// Attaches the bearer token returned by `login` to every subsequent
    /// request.
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    pub fn set_access_token(&mut self, token: impl Into<String>) {
        self.access_token = Some(token.into());
    }

    pub fn clear_access_token(&mut self) {
        self.access_token = None;
    }

    /// Current state of the circuit breaker.
    pub fn circuit_state(&self) -> &'static str {
        if self.circuit_breaker.is_call_permitted() {
            "closed"
        } else {
            "open"
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let mut builder = self.client.request(method, self.url(path));
        if let Some(token) = &self.access_token {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    /// Sends the request and unwraps the success envelope into `T`.
    async fn execute<T: DeserializeOwned>(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let result = self
            .circuit_breaker
            .call(async move {
                let response = builder.send().await?;
                let response = Self::check_status(response).await?;
                let envelope = response
                    .json::<ApiEnvelope<T>>()
                    .await
                    .map_err(|err| ClientError::InvalidResponse(err.to_string()))?;
                Ok(envelope.data)
            })
            .await;

        match result {
            Ok(value) => Ok(value),
            Err(FailsafeError::Rejected) => Err(ClientError::CircuitOpen),
            Err(FailsafeError::Inner(err)) => Err(err),
        }
    }

    /// Sends the request for endpoints whose response body carries nothing
    /// the caller needs.
    async fn execute_unit(&self, builder: reqwest::RequestBuilder) -> Result<(), ClientError> {
        let result = self
            .circuit_breaker
            .call(async move {
                let response = builder.send().await?;
                Self::check_status(response).await?;
                Ok(())
            })
            .await;

        match result {
            Ok(()) => Ok(()),
            Err(FailsafeError::Rejected) => Err(ClientError::CircuitOpen),
            Err(FailsafeError::Inner(err)) => Err(err),
        }
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        match serde_json::from_str::<ApiErrorEnvelope>(&body) {
            Ok(envelope) => Err(ClientError::Api {
                status: status.as_u16(),
                code: envelope.error.code,
                message: envelope.error.message,
                trace_id: envelope.trace_id,
            }),
            Err(_) => Err(ClientError::Api {
                status: status.as_u16(),
                code: "UNKNOWN".to_string(),
                message: if body.is_empty() {
                    status.to_string()
                } else {
                    body
                },
                trace_id: None,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_keeps_its_base_url() {
        let client = AdminApiClient::new("https://api.example.test/");
        assert_eq!(client.url("/admin/auth/session"), "https://api.example.test/admin/auth/session");
    }

    #[test]
    fn circuit_breaker_starts_closed() {
        let client = AdminApiClient::new("https://api.example.test");
        assert_eq!(client.circuit_state(), "closed");
    }
}
