pub mod fold;
pub mod health;
pub mod result;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /fold                 POST   submit a fold job
/// /result/{job_id}      GET    fetch a stored score matrix
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/fold", fold::router())
        .nest("/result", result::router())
}
