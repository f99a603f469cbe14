//! Client-side error type.

/// Errors from [`JobClient`](crate::JobClient) calls.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The service answered with a non-2xx status. The message is the raw
    /// response body text, verbatim; no distinction is made between 4xx
    /// and 5xx.
    #[error("{0}")]
    RequestFailed(String),

    /// The HTTP request itself failed (DNS, connection, body decode).
    /// Surfaced unchanged from the transport layer.
    #[error(transparent)]
    Request(#[from] reqwest::Error),
}
