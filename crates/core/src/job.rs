//! Per-job identifiers, provenance, and artifact records.

use serde::{Deserialize, Serialize};

use crate::types::{JobId, Timestamp};

/// Generate a fresh job identifier (UUID v4).
pub fn new_job_id() -> JobId {
    uuid::Uuid::new_v4().to_string()
}

/// Provenance of one solver run, persisted as `meta.json` in the job
/// directory and echoed back in the submission response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoldJobMeta {
    /// Captured solver stdout (capped).
    pub stdout: String,
    /// Captured solver stderr (capped).
    pub stderr: String,
    /// Solver process exit code (`-1` if killed by signal). A nonzero
    /// code does not fail the job as long as output was produced.
    pub returncode: i32,
    /// Method name the solver ran with.
    pub method: String,
    /// Thread count the solver ran with.
    pub threads: u32,
    /// Path of the score dump the solver wrote.
    pub out_file: String,
    /// Solver wall-clock time in milliseconds.
    pub time_ms: u64,
    /// SHA-256 hex digest of the normalized input sequence.
    pub sequence_sha256: String,
    /// When the job was submitted.
    pub created_at: Timestamp,
}

/// Artifact paths produced by a completed job, keyed by artifact kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobFiles {
    /// Path of the `S.json` score matrix document.
    pub json: String,
}

/// Everything a completed fold run hands back to the HTTP layer.
#[derive(Debug, Clone, Serialize)]
pub struct FoldOutcome {
    pub job_id: JobId,
    pub files: JobFiles,
    pub meta: FoldJobMeta,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_ids_are_uuids() {
        let id = new_job_id();
        assert!(uuid::Uuid::parse_str(&id).is_ok());
    }

    #[test]
    fn job_ids_are_unique() {
        assert_ne!(new_job_id(), new_job_id());
    }

    #[test]
    fn meta_round_trips_through_json() {
        let meta = FoldJobMeta {
            stdout: "done\n".into(),
            stderr: String::new(),
            returncode: 0,
            method: "oryg".into(),
            threads: 4,
            out_file: "/tmp/job/input.fasta.out.txt".into(),
            time_ms: 1234,
            sequence_sha256: "ab".repeat(32),
            created_at: chrono::Utc::now(),
        };
        let json = serde_json::to_string(&meta).unwrap();
        let back: FoldJobMeta = serde_json::from_str(&json).unwrap();
        assert_eq!(back.method, "oryg");
        assert_eq!(back.threads, 4);
        assert_eq!(back.time_ms, 1234);
    }
}
