//! Integration tests for the fold submission endpoint.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json};

const SEQUENCE: &str = "ACGUACGUACGU";

fn submit_body(sequence: &str, method: &str, threads: u32) -> serde_json::Value {
    serde_json::json!({ "sequence": sequence, "method": method, "threads": threads })
}

// ---------------------------------------------------------------------------
// Validation failures
// ---------------------------------------------------------------------------

#[tokio::test]
async fn short_sequence_is_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    let app = common::build_test_app(common::test_config(tmp.path()));

    let response = post_json(app, "/api/v1/fold", submit_body("ACGU", "oryg", 2)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn oversized_sequence_is_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    let mut config = common::test_config(tmp.path());
    config.max_sequence_len = 16;
    let app = common::build_test_app(config);

    let response = post_json(
        app,
        "/api/v1/fold",
        submit_body(&"A".repeat(17), "oryg", 2),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].as_str().unwrap().contains("too long"));
}

#[tokio::test]
async fn unknown_method_is_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    let app = common::build_test_app(common::test_config(tmp.path()));

    let response = post_json(app, "/api/v1/fold", submit_body(SEQUENCE, "zuker", 2)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].as_str().unwrap().contains("zuker"));
}

#[tokio::test]
async fn thread_count_out_of_bounds_is_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    let app = common::build_test_app(common::test_config(tmp.path()));

    let response = post_json(
        app.clone(),
        "/api/v1/fold",
        submit_body(SEQUENCE, "oryg", 0),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json(app, "/api/v1/fold", submit_body(SEQUENCE, "oryg", 65)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Solver failures
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_solver_binary_is_a_solver_error() {
    let tmp = tempfile::tempdir().unwrap();
    // No stub is written, so the configured binary does not exist.
    let app = common::build_test_app(common::test_config(tmp.path()));

    let response = post_json(app, "/api/v1/fold", submit_body(SEQUENCE, "oryg", 2)).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["code"], "SOLVER_ERROR");
}

// ---------------------------------------------------------------------------
// End-to-end submission
// ---------------------------------------------------------------------------

#[cfg(unix)]
#[tokio::test]
async fn fold_runs_solver_and_result_roundtrips() {
    let tmp = tempfile::tempdir().unwrap();
    let config = common::test_config(tmp.path());
    common::write_solver_stub(&config, "printf '0 1 2\\n0 0 1\\n0 0 0\\n' > \"$1.out.txt\"");
    let app = common::build_test_app(config);

    // Submissions arrive with FASTA-style line breaks and mixed case.
    let response = post_json(
        app.clone(),
        "/api/v1/fold",
        submit_body("acgu\nacguacgu", "tstile", 2),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let job_id = json["job_id"].as_str().unwrap().to_string();
    assert_eq!(json["method"], "tstile");
    assert_eq!(json["threads"], 2);
    assert_eq!(json["meta"]["returncode"], 0);
    assert_eq!(json["meta"]["threads"], 2);
    assert!(json["files"]["json"].as_str().unwrap().ends_with("S.json"));

    // The result endpoint serves the matrix the stub produced.
    let response = get(app, &format!("/api/v1/result/{job_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let result = body_json(response).await;
    assert_eq!(
        result["S"],
        serde_json::json!([[1, 2, 0], [0, 1, 0], [0, 0, 0]])
    );
}
