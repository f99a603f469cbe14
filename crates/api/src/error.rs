use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use nussfold_core::error::CoreError;
use nussfold_core::solver::SolverError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`SolverError`] for solver
/// runtime failures. Implements [`IntoResponse`] to produce consistent
/// JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `nussfold-core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A solver runtime failure.
    #[error(transparent)]
    Solver(#[from] SolverError),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
                CoreError::Io(err) => {
                    tracing::error!(error = %err, "I/O error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
                CoreError::Json(err) => {
                    tracing::error!(error = %err, "Serialization error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- Solver runtime errors ---
            AppError::Solver(SolverError::Timeout { elapsed_ms }) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "SOLVER_TIMEOUT",
                format!("Solver timed out after {elapsed_ms}ms"),
            ),
            AppError::Solver(err) => {
                tracing::error!(error = %err, "Solver error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "SOLVER_ERROR",
                    "Solver execution failed".to_string(),
                )
            }

            // --- HTTP-specific errors ---
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
