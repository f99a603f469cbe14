//! HTTP client for the nussfold fold API.
//!
//! [`JobClient`] wraps the two calls a frontend makes against the fold
//! service: submitting a folding job and fetching its score matrix. It is
//! a leaf consumer of the HTTP contract with no state beyond the base URL,
//! no retries, and no validation of what the backend returns.

pub mod client;
pub mod error;
pub mod types;

pub use client::JobClient;
pub use error::ClientError;
pub use types::{FoldRequest, FoldResult, JobHandle};
