//! Integration tests for `POST /api/optimize-content`.

mod common;

use axum::http::StatusCode;
use common::{body_json, post_json, StubProvider};
use serde_json::json;

#[tokio::test]
async fn non_json_upstream_echoes_input_with_default_score() {
    let provider = StubProvider::replying("not json");
    let app = common::build_test_app(provider.clone());

    let response = post_json(
        app,
        "/api/optimize-content",
        json!({"title": "My Video", "description": "About stuff", "tags": ["a", "b"]}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let optimization = &json["optimization"];
    assert_eq!(optimization["optimizedTitle"], "My Video");
    assert_eq!(optimization["optimizedDescription"], "About stuff");
    assert_eq!(optimization["optimizedTags"], json!(["a", "b"]));
    assert_eq!(optimization["seoScore"], 50);
    assert_eq!(json["success"], true);
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn json_upstream_is_used() {
    let reply = json!({
        "optimizedTitle": "Better Title",
        "optimizedDescription": "Better description",
        "optimizedTags": ["x", "y", "z"],
        "seoScore": 91,
        "explanation": "stronger keywords"
    })
    .to_string();
    let provider = StubProvider::replying(&reply);
    let app = common::build_test_app(provider.clone());

    let response = post_json(
        app,
        "/api/optimize-content",
        json!({"title": "t", "description": "d"}),
    )
    .await;

    let json = body_json(response).await;
    assert_eq!(json["optimization"]["optimizedTitle"], "Better Title");
    assert_eq!(json["optimization"]["seoScore"], 91);
    assert_eq!(json["metadata"]["tagCount"], 3);

    let request = provider.last_request().unwrap();
    assert_eq!(request.temperature, Some(0.5));
}

#[tokio::test]
async fn missing_description_returns_400() {
    let provider = StubProvider::replying("{}");
    let app = common::build_test_app(provider.clone());

    let response = post_json(app, "/api/optimize-content", json!({"title": "t"})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Title and description are required");
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn upstream_failure_returns_500() {
    let app = common::build_test_app(StubProvider::failing(429));

    let response = post_json(
        app,
        "/api/optimize-content",
        json!({"title": "t", "description": "d"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Failed to optimize content");
    assert!(json["details"].as_str().unwrap().contains("429"));
}

#[tokio::test]
async fn null_title_returns_400() {
    let provider = StubProvider::replying("{}");
    let app = common::build_test_app(provider.clone());

    let response = post_json(
        app,
        "/api/optimize-content",
        json!({"title": null, "description": "d"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Title and description are required");
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn string_seo_score_is_kept() {
    let provider = StubProvider::replying(r#"{"optimizedTitle": "Better", "seoScore": "87"}"#);
    let app = common::build_test_app(provider);

    let response = post_json(
        app,
        "/api/optimize-content",
        json!({"title": "t", "description": "d"}),
    )
    .await;

    let json = body_json(response).await;
    assert_eq!(json["optimization"]["optimizedTitle"], "Better");
    assert_eq!(json["optimization"]["seoScore"], 87);
}
