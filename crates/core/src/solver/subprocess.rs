//! Shared subprocess plumbing for the solver runtime.
//!
//! [`run_command`] handles the spawn + capture + timeout mechanics;
//! [`runner`](super::runner) decides what to do with the captured output.

use std::process::Stdio;
use std::time::{Duration, Instant};

use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;

use super::runner::{SolverCapture, SolverError};

/// Maximum stdout or stderr size captured per stream (10 MiB).
///
/// Output beyond this limit is truncated; verbose solver builds log per-cell
/// progress and would otherwise exhaust memory.
const MAX_OUTPUT_BYTES: usize = 10 * 1024 * 1024;

/// Spawn `cmd`, capture stdout/stderr, and enforce `timeout`.
///
/// The caller configures program, arguments, environment, and working
/// directory beforehand. stdin is closed; the solver reads only its input
/// file.
pub async fn run_command(cmd: &mut Command, timeout: Duration) -> Result<SolverCapture, SolverError> {
    // `kill_on_drop(true)` reaps the child when it is dropped (e.g. on timeout).
    cmd.stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let start = Instant::now();
    let mut child = cmd.spawn()?;

    // Take stdout/stderr handles and read them in spawned tasks so we can
    // still call `child.wait()` (which borrows `&mut child`).
    let stdout_handle = child.stdout.take();
    let stderr_handle = child.stderr.take();
    let stdout_task = tokio::spawn(read_stream(stdout_handle));
    let stderr_task = tokio::spawn(read_stream(stderr_handle));

    match tokio::time::timeout(timeout, child.wait()).await {
        Ok(Ok(status)) => {
            let duration_ms = start.elapsed().as_millis() as u64;
            let stdout_bytes = stdout_task.await.unwrap_or_default();
            let stderr_bytes = stderr_task.await.unwrap_or_default();

            Ok(SolverCapture {
                stdout: String::from_utf8_lossy(&stdout_bytes).into_owned(),
                stderr: String::from_utf8_lossy(&stderr_bytes).into_owned(),
                exit_code: status.code().unwrap_or(-1),
                duration_ms,
            })
        }
        Ok(Err(e)) => Err(SolverError::Io(e)),
        Err(_elapsed) => {
            // Timeout expired. `child` is dropped here, which kills the
            // process because we set `kill_on_drop(true)`.
            Err(SolverError::Timeout {
                elapsed_ms: start.elapsed().as_millis() as u64,
            })
        }
    }
}

/// Read an entire output stream into a byte buffer, capped at [`MAX_OUTPUT_BYTES`].
async fn read_stream<R: AsyncRead + Unpin>(handle: Option<R>) -> Vec<u8> {
    let mut buf = Vec::new();
    if let Some(mut h) = handle {
        let _ = (&mut h)
            .take(MAX_OUTPUT_BYTES as u64)
            .read_to_end(&mut buf)
            .await;
    }
    buf
}
