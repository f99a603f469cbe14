//! Route definitions for the `/result` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::result;
use crate::state::AppState;

/// Routes mounted at `/result`.
///
/// ```text
/// GET    /{job_id}    -> get_result
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{job_id}", get(result::get_result))
}
