use super::common::*;
use axum::body::{to_bytes, Body};
use axum::extract::State;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use crate::workflows::credit::engine::FixedClock;
use crate::workflows::credit::router::{decision_handler, decision_router};

async fn json_body(response: Response) -> Value {
    let body = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

#[tokio::test]
async fn decision_handler_returns_decision() {
    let response = decision_handler::<FixedClock>(
        State(Arc::new(engine())),
        axum::Json(application(42, clean_report("0787"), 600.0)),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let payload = json_body(response).await;
    assert_eq!(payload["application_id"], 42);
    assert_eq!(payload["knockout_result"], "ACCEPT");
    assert_eq!(payload["credit_limit"], 7000);
    assert_eq!(payload["check_outcomes"]["age"]["measured_value"], 59.0);
}

#[tokio::test]
async fn decision_handler_returns_unprocessable_for_missing_report() {
    let mut application = application(43, clean_report("0787"), 600.0);
    application.credit_bureau_report = None;

    let response =
        decision_handler::<FixedClock>(State(Arc::new(engine())), axum::Json(application)).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = json_body(response).await;
    assert_eq!(payload["kind"], "precondition");
    assert_eq!(payload["application_id"], 43);
}

#[tokio::test]
async fn router_serves_batch_with_per_application_errors() {
    let router = decision_router(Arc::new(engine()));
    let mut broken = application(3, clean_report("0787"), 600.0);
    broken.credit_bureau_report = None;
    let body = json!([
        application(1, clean_report("0787"), 600.0),
        application(2, report("0832", [Some("00"), Some("01"), None, None]), 600.0),
        broken,
    ]);

    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/credit/decisions/batch")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .expect("request"),
        )
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = json_body(response).await;
    assert_eq!(payload["accepted"], 1);
    assert_eq!(payload["rejected"], 1);
    assert_eq!(payload["failed"], 1);

    let entries = payload["entries"].as_array().expect("entries");
    assert_eq!(entries[0]["status"], "decided");
    assert_eq!(entries[1]["credit_limit"], "N/A");
    assert_eq!(entries[2]["status"], "failed");
    assert_eq!(entries[2]["kind"], "precondition");
}
