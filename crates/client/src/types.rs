//! Wire types for the fold service API.
//!
//! Response types require only their declared fields and capture everything
//! else in a flattened map, so a successful body passes through the client
//! unchanged -- the backend's JSON is trusted, not schema-validated.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of `POST /fold`. Constructed per call, never reused.
#[derive(Debug, Clone, Serialize)]
pub struct FoldRequest {
    /// Residue sequence to fold. Not validated client-side.
    pub sequence: String,
    /// Folding method name, opaque to the client.
    pub method: String,
    /// Desired parallelism hint.
    pub threads: u32,
}

/// Response of `POST /fold`: the handle used to fetch the result later.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobHandle {
    /// Backend-issued identifier for the completed job.
    pub job_id: String,
    /// Run provenance as reported by the backend; opaque to the client.
    pub meta: Value,
    /// Any additional fields the backend includes, preserved as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Response of `GET /result/{job_id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoldResult {
    /// Pairwise score matrix. Shape and numeric semantics are defined by
    /// the backend; the client imposes no invariant on them.
    #[serde(rename = "S")]
    pub s: Vec<Vec<f64>>,
    /// Any additional fields the backend includes, preserved as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
