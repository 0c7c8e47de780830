//! Integration tests for the dashboard data endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, StubProvider};

#[tokio::test]
async fn metrics_endpoint_lists_six_metrics() {
    let app = common::build_test_app(StubProvider::replying(""));

    let response = get(app, "/api/dashboard/metrics").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let metrics = json["metrics"].as_array().unwrap();
    assert_eq!(metrics.len(), 6);
    assert_eq!(metrics[0]["label"], "Content Ideas Generated");
    assert_eq!(metrics[4]["format"], "duration");
    assert_eq!(json["success"], true);
}

#[tokio::test]
async fn workflows_endpoint_lists_five_workflows() {
    let provider = StubProvider::replying("");
    let app = common::build_test_app(provider.clone());

    let response = get(app, "/api/dashboard/workflows").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let workflows = json["workflows"].as_array().unwrap();
    assert_eq!(workflows.len(), 5);
    assert_eq!(workflows[4]["status"], "error");
    assert_eq!(workflows[1]["progress"], 100);
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn automations_endpoint_lists_scheduled_workflows() {
    let app = common::build_test_app(StubProvider::replying(""));

    let response = get(app, "/api/dashboard/automations").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let automations = json["automations"].as_array().unwrap();
    assert_eq!(automations.len(), 4);
    assert_eq!(automations[0]["name"], "Daily Content Ideas");
    assert_eq!(automations[0]["frequency"], "Daily at 9:00 AM");
    assert_eq!(automations[2]["status"], "paused");
    assert_eq!(json["success"], true);
}
