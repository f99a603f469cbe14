//! Handler for the fold submission endpoint.
//!
//! Submissions are validated, then the solver runs to completion inside
//! the request; there is no queue. The response carries everything a
//! client needs to fetch the result later.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use nussfold_core::fold::{self, FoldMethod};
use nussfold_core::job::{FoldJobMeta, JobFiles};
use nussfold_core::types::JobId;

use crate::error::AppResult;
use crate::state::AppState;

/// Body of `POST /api/v1/fold`.
#[derive(Debug, Deserialize)]
pub struct SubmitFoldRequest {
    pub sequence: String,
    pub method: String,
    pub threads: u32,
}

/// Response of a successful submission.
#[derive(Debug, Serialize)]
pub struct SubmitFoldResponse {
    pub job_id: JobId,
    pub method: &'static str,
    pub threads: u32,
    pub files: JobFiles,
    pub meta: FoldJobMeta,
}

/// POST /api/v1/fold
///
/// Validate the submission, run the solver, and return the job handle.
pub async fn submit_fold(
    State(state): State<AppState>,
    Json(input): Json<SubmitFoldRequest>,
) -> AppResult<impl IntoResponse> {
    fold::validate_raw_sequence(&input.sequence)?;
    let sequence = fold::normalize_sequence(&input.sequence);
    fold::validate_normalized_sequence(&sequence, state.config.max_sequence_len)?;
    let method = FoldMethod::from_name(&input.method)?;
    fold::validate_threads(input.threads)?;

    let outcome = state
        .solver
        .run(&state.store, &sequence, method, input.threads)
        .await?;

    tracing::info!(
        job_id = %outcome.job_id,
        method = method.name(),
        threads = input.threads,
        time_ms = outcome.meta.time_ms,
        "Fold job completed",
    );

    Ok(Json(SubmitFoldResponse {
        job_id: outcome.job_id,
        method: method.name(),
        threads: input.threads,
        files: outcome.files,
        meta: outcome.meta,
    }))
}
