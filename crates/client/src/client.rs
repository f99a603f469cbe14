//! REST client for the fold service HTTP endpoints.

use serde::de::DeserializeOwned;

use crate::error::ClientError;
use crate::types::{FoldRequest, FoldResult, JobHandle};

/// API base used when [`API_BASE_ENV`] is not set.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api/v1";

/// Environment variable overriding the API base URL.
pub const API_BASE_ENV: &str = "NUSSFOLD_API_BASE";

/// HTTP client for a single fold service.
///
/// Each call issues one request and suspends until the response arrives;
/// concurrent calls are independent and unordered. There is no retry, no
/// caching, and no client-side timeout beyond what the transport imposes.
pub struct JobClient {
    client: reqwest::Client,
    base_url: String,
}

impl JobClient {
    /// Create a client targeting `base_url` (e.g. `http://host:8000/api/v1`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling across services).
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Resolve the base URL from the environment once, falling back to
    /// [`DEFAULT_API_BASE`] when [`API_BASE_ENV`] is unset.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(API_BASE_ENV).unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        Self::new(base_url)
    }

    /// Base HTTP API URL this client targets.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submit a folding job.
    ///
    /// Sends `POST {base}/fold` with exactly `{sequence, method, threads}`
    /// as the JSON body. Inputs are serialized as-is; validation is the
    /// backend's concern.
    pub async fn submit_fold(
        &self,
        sequence: &str,
        method: &str,
        threads: u32,
    ) -> Result<JobHandle, ClientError> {
        let body = FoldRequest {
            sequence: sequence.to_string(),
            method: method.to_string(),
            threads,
        };

        tracing::debug!(method, threads, "Submitting fold job");

        let response = self
            .client
            .post(format!("{}/fold", self.base_url))
            .json(&body)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Fetch the score matrix for a previously submitted job.
    ///
    /// Sends `GET {base}/result/{job_id}` with no body. `job_id` is used
    /// verbatim; the client does not check its format.
    pub async fn fetch_result(&self, job_id: &str) -> Result<FoldResult, ClientError> {
        tracing::debug!(job_id, "Fetching fold result");

        let response = self
            .client
            .get(format!("{}/result/{}", self.base_url, job_id))
            .send()
            .await?;

        Self::parse_response(response).await
    }

    // ---- private helpers ----

    /// Parse a response body into the expected type.
    ///
    /// Non-2xx statuses become [`ClientError::RequestFailed`] carrying the
    /// body text verbatim. Transport and decode errors pass through as
    /// [`ClientError::Request`].
    async fn parse_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ClientError::RequestFailed(body));
        }
        Ok(response.json::<T>().await?)
    }
}
