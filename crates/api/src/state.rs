use std::sync::Arc;

use nussfold_core::solver::FoldSolver;
use nussfold_core::storage::JobStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Per-job artifact storage.
    pub store: Arc<JobStore>,
    /// Handle to the external solver binary.
    pub solver: Arc<FoldSolver>,
}
