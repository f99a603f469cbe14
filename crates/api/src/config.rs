use std::path::PathBuf;

use nussfold_core::fold::DEFAULT_MAX_SEQUENCE_LEN;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `630`). Folds run inside
    /// the request, so this must exceed the solver's wall-clock budget.
    pub request_timeout_secs: u64,
    /// Path of the fold solver executable.
    pub fold_bin: PathBuf,
    /// Root directory for per-job artifacts.
    pub jobs_dir: PathBuf,
    /// Upper bound on normalized sequence length.
    pub max_sequence_len: usize,
    /// Wall-clock budget per solver run, in seconds.
    pub solver_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `8000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `630`                      |
    /// | `FOLD_BIN`             | `./nuss3d/build/nuss3d`    |
    /// | `JOBS_DIR`             | `./runtime/jobs`           |
    /// | `MAX_SEQUENCE_LEN`     | `6000`                     |
    /// | `SOLVER_TIMEOUT_SECS`  | `600`                      |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "630".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let fold_bin = PathBuf::from(
            std::env::var("FOLD_BIN").unwrap_or_else(|_| "./nuss3d/build/nuss3d".into()),
        );

        let jobs_dir =
            PathBuf::from(std::env::var("JOBS_DIR").unwrap_or_else(|_| "./runtime/jobs".into()));

        let max_sequence_len: usize = std::env::var("MAX_SEQUENCE_LEN")
            .unwrap_or_else(|_| DEFAULT_MAX_SEQUENCE_LEN.to_string())
            .parse()
            .expect("MAX_SEQUENCE_LEN must be a valid usize");

        let solver_timeout_secs: u64 = std::env::var("SOLVER_TIMEOUT_SECS")
            .unwrap_or_else(|_| "600".into())
            .parse()
            .expect("SOLVER_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            fold_bin,
            jobs_dir,
            max_sequence_len,
            solver_timeout_secs,
        }
    }
}
