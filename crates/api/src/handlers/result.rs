//! Handler for the result retrieval endpoint.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/v1/result/{job_id}
///
/// Return the stored score-matrix document verbatim. 404 if the job has
/// no persisted result.
pub async fn get_result(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> AppResult<Json<serde_json::Value>> {
    // Result documents can be large; read them off the async workers.
    let store = Arc::clone(&state.store);
    let value = tokio::task::spawn_blocking(move || store.read_result(&job_id))
        .await
        .map_err(|e| AppError::InternalError(format!("Result read task failed: {e}")))??;

    Ok(Json(value))
}
