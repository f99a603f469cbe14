//! Fold solver invocation and artifact finalization.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tokio::process::Command;

use crate::error::CoreError;
use crate::fold::FoldMethod;
use crate::job::{self, FoldJobMeta, FoldOutcome, JobFiles};
use crate::matrix::{self, MatrixError, ScoreDocument};
use crate::storage::{self, JobStore};
use crate::types::JobId;

use super::subprocess;

/// Suffix of the score dump the solver writes into the job directory.
const OUTPUT_SUFFIX: &str = ".out.txt";

/// Captured output of one solver process.
#[derive(Debug, Clone)]
pub struct SolverCapture {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
    pub duration_ms: u64,
}

/// Errors from running the solver and finalizing its artifacts.
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    /// The solver binary does not exist at the configured path.
    #[error("Solver binary not found: {0}")]
    NotFound(String),

    /// The solver binary exists but lacks execute permissions.
    #[error("Permission denied: {0}")]
    NotExecutable(String),

    /// The solver exceeded its wall-clock budget and was killed.
    #[error("Solver timed out after {elapsed_ms}ms")]
    Timeout { elapsed_ms: u64 },

    /// The solver exited without writing a score dump.
    #[error("Solver produced no *.out.txt file in {job_dir}")]
    MissingOutput { job_dir: String },

    /// The score dump could not be parsed into a matrix.
    #[error("Invalid solver output: {0}")]
    InvalidOutput(#[from] MatrixError),

    /// Spawning or waiting on the solver process failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A storage or serialization failure while persisting artifacts.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Handle to the configured solver binary.
#[derive(Debug, Clone)]
pub struct FoldSolver {
    bin: PathBuf,
    timeout: Duration,
}

impl FoldSolver {
    /// * `bin`     - path of the solver executable.
    /// * `timeout` - wall-clock budget per run; the process is killed on expiry.
    pub fn new(bin: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            bin: bin.into(),
            timeout,
        }
    }

    /// Path of the solver executable.
    pub fn binary(&self) -> &Path {
        &self.bin
    }

    /// Run one fold job to completion.
    ///
    /// Creates the job directory, writes the FASTA input, spawns the solver
    /// with `OMP_NUM_THREADS` set to the requested thread count, then parses
    /// the score dump and persists `S.json` and `meta.json`.
    ///
    /// The process exit code is recorded in the meta record but does not by
    /// itself fail the run; only a missing or unparseable dump does.
    pub async fn run(
        &self,
        store: &JobStore,
        sequence: &str,
        method: FoldMethod,
        threads: u32,
    ) -> Result<FoldOutcome, SolverError> {
        // Verify the binary exists.
        let metadata = tokio::fs::metadata(&self.bin)
            .await
            .map_err(|_| SolverError::NotFound(self.bin.display().to_string()))?;

        // Verify execute permission.
        let mode = metadata.permissions().mode();
        if mode & 0o111 == 0 {
            return Err(SolverError::NotExecutable(format!(
                "{} is not executable (mode {mode:#o})",
                self.bin.display()
            )));
        }

        let job_id = job::new_job_id();
        let job_dir = store.create_job_dir(&job_id)?;

        let fasta = job_dir.join(storage::INPUT_FILE);
        storage::write_text(&fasta, &format!(">job\n{sequence}\n"))?;

        let mut cmd = Command::new(&self.bin);
        cmd.arg(&fasta)
            .arg(method.name())
            .arg(threads.to_string())
            .env("OMP_NUM_THREADS", threads.to_string())
            .current_dir(&job_dir);

        let capture = subprocess::run_command(&mut cmd, self.timeout).await?;

        // Score dumps for long sequences run to tens of megabytes; keep the
        // parse and artifact writes off the async workers.
        let method_name = method.name().to_string();
        let digest = storage::sha256_hex(sequence.as_bytes());
        tokio::task::spawn_blocking(move || {
            finalize(job_id, &job_dir, capture, method_name, threads, digest)
        })
        .await
        .map_err(|e| CoreError::Internal(format!("Finalize task failed: {e}")))?
    }
}

/// Turn a finished solver process into persisted job artifacts.
fn finalize(
    job_id: JobId,
    job_dir: &Path,
    capture: SolverCapture,
    method: String,
    threads: u32,
    sequence_sha256: String,
) -> Result<FoldOutcome, SolverError> {
    let Some(out_file) = find_score_dump(job_dir)? else {
        // Keep stdout around for debugging the solver run.
        storage::write_text(&job_dir.join(storage::STDOUT_FILE), &capture.stdout)?;
        return Err(SolverError::MissingOutput {
            job_dir: job_dir.display().to_string(),
        });
    };

    let dump = fs::read_to_string(&out_file)?;
    let s = matrix::parse_score_dump(&dump)?;

    let result_path = job_dir.join(storage::RESULT_FILE);
    let document = serde_json::to_string(&ScoreDocument { s }).map_err(CoreError::from)?;
    storage::write_text(&result_path, &document)?;

    let meta = FoldJobMeta {
        stdout: capture.stdout,
        stderr: capture.stderr,
        returncode: capture.exit_code,
        method,
        threads,
        out_file: out_file.display().to_string(),
        time_ms: capture.duration_ms,
        sequence_sha256,
        created_at: chrono::Utc::now(),
    };
    let meta_json = serde_json::to_string(&meta).map_err(CoreError::from)?;
    storage::write_text(&job_dir.join(storage::META_FILE), &meta_json)?;

    Ok(FoldOutcome {
        job_id,
        files: JobFiles {
            json: result_path.display().to_string(),
        },
        meta,
    })
}

/// Locate the score dump the solver wrote into `job_dir`, if any.
///
/// Solver builds differ in how they derive the dump name from the input
/// file, so any `*.out.txt` in the directory counts. The lexicographically
/// first match wins to keep reruns deterministic.
fn find_score_dump(job_dir: &Path) -> Result<Option<PathBuf>, SolverError> {
    let mut candidates: Vec<PathBuf> = fs::read_dir(job_dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.ends_with(OUTPUT_SUFFIX))
        })
        .collect();
    candidates.sort();
    Ok(candidates.into_iter().next())
}
