#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use nussfold_api::config::ServerConfig;
use nussfold_api::routes;
use nussfold_api::state::AppState;
use nussfold_core::solver::FoldSolver;
use nussfold_core::storage::JobStore;

/// Build a test `ServerConfig` rooted in `dir`.
///
/// The solver path points at `dir/solver-stub.sh`; tests that need a live
/// solver create it with [`write_solver_stub`].
pub fn test_config(dir: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        fold_bin: dir.join("solver-stub.sh"),
        jobs_dir: dir.join("jobs"),
        max_sequence_len: 6000,
        solver_timeout_secs: 10,
    }
}

/// Build the full application router with all middleware layers, using the
/// given configuration.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_test_app(config: ServerConfig) -> Router {
    let store = JobStore::new(config.jobs_dir.clone());
    store.ensure_root().expect("create jobs dir");

    let solver = FoldSolver::new(
        config.fold_bin.clone(),
        Duration::from_secs(config.solver_timeout_secs),
    );

    let state = AppState {
        config: Arc::new(config),
        store: Arc::new(store),
        solver: Arc::new(solver),
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

/// Write an executable `/bin/sh` stub at the config's solver path.
///
/// Stubs receive the real argument list: `<fasta> <method> <threads>`.
pub fn write_solver_stub(config: &ServerConfig, body: &str) {
    std::fs::write(&config.fold_bin, format!("#!/bin/sh\n{body}\n")).expect("write stub");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = std::fs::metadata(&config.fold_bin)
            .expect("stub metadata")
            .permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&config.fold_bin, perms).expect("chmod stub");
    }
}

/// Issue a GET request against the app.
pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Issue a POST request with a JSON body against the app.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Decode a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
