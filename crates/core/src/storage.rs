//! Filesystem layout for job artifacts.
//!
//! Every job owns one directory under the configured jobs root:
//!
//! ```text
//! {root}/{job_id}/input.fasta       written before the solver starts
//! {root}/{job_id}/*.out.txt         written by the solver
//! {root}/{job_id}/S.json            parsed score matrix
//! {root}/{job_id}/meta.json         run provenance
//! {root}/{job_id}/stdout.txt        only when the solver produced no dump
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use crate::error::CoreError;

/// File name of the FASTA input handed to the solver.
pub const INPUT_FILE: &str = "input.fasta";

/// File name of the persisted score matrix document.
pub const RESULT_FILE: &str = "S.json";

/// File name of the persisted run provenance.
pub const META_FILE: &str = "meta.json";

/// File name of the stdout dump kept when the solver produced no output.
pub const STDOUT_FILE: &str = "stdout.txt";

/// Root-anchored accessor for per-job artifact directories.
#[derive(Debug, Clone)]
pub struct JobStore {
    root: PathBuf,
}

impl JobStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the jobs root if it does not exist yet.
    pub fn ensure_root(&self) -> Result<(), CoreError> {
        fs::create_dir_all(&self.root)?;
        Ok(())
    }

    /// Directory owned by `job_id`.
    pub fn job_dir(&self, job_id: &str) -> PathBuf {
        self.root.join(job_id)
    }

    /// Create and return the directory for a new job.
    pub fn create_job_dir(&self, job_id: &str) -> Result<PathBuf, CoreError> {
        let dir = self.job_dir(job_id);
        fs::create_dir_all(&dir)?;
        Ok(dir)
    }

    /// Path of the persisted score matrix for `job_id`.
    pub fn result_path(&self, job_id: &str) -> PathBuf {
        self.job_dir(job_id).join(RESULT_FILE)
    }

    /// Read the persisted score matrix document for `job_id` verbatim.
    ///
    /// The stored JSON is returned as-is, without imposing a schema on it.
    pub fn read_result(&self, job_id: &str) -> Result<serde_json::Value, CoreError> {
        let path = self.result_path(job_id);
        if !path.exists() {
            return Err(CoreError::NotFound {
                entity: "Result",
                id: job_id.to_string(),
            });
        }
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

/// Write `text` to `path`, creating parent directories as needed.
pub fn write_text(path: &Path, text: &str) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, text)?;
    Ok(())
}

/// SHA-256 hex digest of the given bytes.
pub fn sha256_hex(data: &[u8]) -> String {
    let hash = Sha256::digest(data);
    format!("{hash:x}")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn job_dir_is_rooted() {
        let store = JobStore::new("/data/jobs");
        assert_eq!(store.job_dir("abc"), PathBuf::from("/data/jobs/abc"));
        assert_eq!(store.result_path("abc"), PathBuf::from("/data/jobs/abc/S.json"));
    }

    #[test]
    fn write_text_creates_parents() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("a/b/input.fasta");
        write_text(&path, ">job\nACGU\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), ">job\nACGU\n");
    }

    #[test]
    fn read_result_missing_is_not_found() {
        let tmp = tempfile::tempdir().unwrap();
        let store = JobStore::new(tmp.path());
        let err = store.read_result("nope").unwrap_err();
        assert_matches!(err, CoreError::NotFound { entity: "Result", .. });
    }

    #[test]
    fn read_result_returns_stored_json_verbatim() {
        let tmp = tempfile::tempdir().unwrap();
        let store = JobStore::new(tmp.path());
        let dir = store.create_job_dir("job1").unwrap();
        fs::write(dir.join(RESULT_FILE), r#"{"S":[[0,1],[1,0]],"extra":true}"#).unwrap();

        let value = store.read_result("job1").unwrap();
        assert_eq!(value["S"][0][1], 1);
        assert_eq!(value["extra"], true);
    }

    #[test]
    fn sha256_hex_known_digest() {
        assert_eq!(
            sha256_hex(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(sha256_hex(b"ACGU").len(), 64);
    }
}
