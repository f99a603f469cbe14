//! Route definitions for the `/fold` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::fold;
use crate::state::AppState;

/// Routes mounted at `/fold`.
///
/// ```text
/// POST   /    -> submit_fold
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(fold::submit_fold))
}
