#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use tubeagent_api::config::ServerConfig;
use tubeagent_api::router::build_app_router;
use tubeagent_api::state::AppState;
use tubeagent_completion::config::{DEFAULT_ENDPOINT, DEFAULT_MODEL};
use tubeagent_completion::messages::ChatCompletionRequest;
use tubeagent_completion::provider::Completion;
use tubeagent_completion::{CompletionConfig, CompletionError, CompletionProvider, ContentGenerator};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        completion: CompletionConfig {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            customer_id: "cus_test".to_string(),
            api_key: "sk-test".to_string(),
            model: DEFAULT_MODEL.to_string(),
        },
    }
}

/// Completion provider that answers every call with a canned reply and
/// counts how often it was invoked.
pub struct StubProvider {
    reply: Result<String, u16>,
    delay: Option<Duration>,
    calls: AtomicUsize,
    last_request: Mutex<Option<ChatCompletionRequest>>,
}

impl StubProvider {
    pub fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(text.to_string()),
            delay: None,
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        })
    }

    /// Every call fails as if the upstream returned `status`.
    pub fn failing(status: u16) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(status),
            delay: None,
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        })
    }

    /// Replies with `text`, but only after `delay`.
    pub fn stalling(text: &str, delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(text.to_string()),
            delay: Some(delay),
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<ChatCompletionRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionProvider for StubProvider {
    async fn complete(&self, request: ChatCompletionRequest) -> Result<Completion, CompletionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match &self.reply {
            Ok(text) => Ok(Completion {
                text: text.clone(),
                ..Default::default()
            }),
            Err(status) => Err(CompletionError::RequestFailed {
                status: *status,
                reason: "Bad Gateway".to_string(),
            }),
        }
    }
}

/// Build the full application router around the given provider.
///
/// Uses the same builder as `main.rs`, so the middleware stack (CORS,
/// request ID, timeout, tracing, panic recovery) is exercised too.
pub fn build_test_app(provider: Arc<StubProvider>) -> Router {
    build_test_app_with_config(provider, test_config())
}

/// Like [`build_test_app`], with a caller-supplied configuration.
pub fn build_test_app_with_config(provider: Arc<StubProvider>, config: ServerConfig) -> Router {
    let state = AppState {
        config: Arc::new(config.clone()),
        generator: Arc::new(ContentGenerator::new(provider)),
    };
    build_app_router(state, &config)
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    post_raw(app, uri, body.to_string()).await
}

pub async fn post_raw(app: Router, uri: &str, body: String) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
