//! Tests for the HTTP API using a scripted backend behind a local listener.

use async_trait::async_trait;
use blueprint_core::{Completion, ModelParameters};
use blueprint_error::{BackendError, ConfigError};
use blueprint_interface::CompletionBackend;
use blueprint_planning::{PlannerSettings, ProjectPlanner, RetryPolicy};
use blueprint_server::create_router;
use serde_json::{Value, json};
use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

struct ScriptedBackend {
    replies: Mutex<VecDeque<Result<String, BackendError>>>,
    calls: AtomicUsize,
    configured: bool,
}

impl ScriptedBackend {
    fn new(replies: Vec<Result<String, BackendError>>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into()),
            calls: AtomicUsize::new(0),
            configured: true,
        })
    }

    fn unconfigured() -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(VecDeque::new()),
            calls: AtomicUsize::new(0),
            configured: false,
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionBackend for ScriptedBackend {
    fn provider_name(&self) -> &str {
        "scripted"
    }

    fn ensure_configured(&self) -> Result<(), ConfigError> {
        if self.configured {
            Ok(())
        } else {
            Err(ConfigError::new("API key not set"))
        }
    }

    async fn complete(
        &self,
        _prompt: &str,
        _parameters: &ModelParameters,
    ) -> Result<Completion, BackendError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(BackendError::new("script exhausted")))
            .map(Completion::text)
    }
}

async fn spawn(backend: Arc<ScriptedBackend>) -> SocketAddr {
    let settings = PlannerSettings::new(ModelParameters::default(), RetryPolicy::none());
    let router = create_router(ProjectPlanner::with_settings(backend, settings));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

async fn post(addr: SocketAddr, path: &str, body: Value) -> (u16, Value) {
    let response = reqwest::Client::new()
        .post(format!("http://{}{}", addr, path))
        .json(&body)
        .send()
        .await
        .unwrap();
    let status = response.status().as_u16();
    (status, response.json().await.unwrap())
}

fn schema_reply() -> String {
    json!({
        "tables": [
            {
                "name": "users",
                "description": "Registered users",
                "fields": [
                    { "name": "id", "type": "uuid", "description": "Primary key", "required": true }
                ]
            }
        ],
        "recommendations": { "additionalTables": [], "suggestedIndexes": ["users(email)"] }
    })
    .to_string()
}

#[tokio::test]
async fn test_health() {
    let addr = spawn(ScriptedBackend::new(vec![])).await;
    let response = reqwest::get(format!("http://{}/health", addr)).await.unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "status": "healthy" }));
}

#[tokio::test]
async fn test_schema_success() {
    let backend = ScriptedBackend::new(vec![Ok(schema_reply())]);
    let addr = spawn(backend.clone()).await;

    let (status, body) = post(addr, "/api/llm/schema", json!({ "summary": "A todo app" })).await;
    assert_eq!(status, 200);
    assert_eq!(body["tables"][0]["name"], "users");
    assert_eq!(body["tables"][0]["fields"][0]["type"], "uuid");
    assert_eq!(backend.calls(), 1);
}

#[tokio::test]
async fn test_missing_summary() {
    let backend = ScriptedBackend::new(vec![Ok(schema_reply())]);
    let addr = spawn(backend.clone()).await;

    let (status, body) = post(addr, "/api/llm/schema", json!({ "summary": "  " })).await;
    assert_eq!(status, 400);
    assert_eq!(body, json!({ "error": "Project summary is required" }));
    assert_eq!(backend.calls(), 0);
}

#[tokio::test]
async fn test_app_structure_requires_schema() {
    let addr = spawn(ScriptedBackend::new(vec![])).await;

    let (status, body) = post(
        addr,
        "/api/llm/app-structure",
        json!({ "summary": "A todo app", "schema": null }),
    )
    .await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "Schema is required");
}

#[tokio::test]
async fn test_feature_tree_requires_tech_stack() {
    let addr = spawn(ScriptedBackend::new(vec![])).await;

    let (status, body) = post(
        addr,
        "/api/llm/feature-tree",
        json!({ "summary": "A todo app", "schema": {}, "appStructure": {} }),
    )
    .await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "Tech stack is required");
}

#[tokio::test]
async fn test_invalid_json_body() {
    let addr = spawn(ScriptedBackend::new(vec![])).await;

    let response = reqwest::Client::new()
        .post(format!("http://{}/api/llm/tech-stack", addr))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn test_unusable_reply_is_bad_gateway_without_raw_text() {
    let reply = "I'd rather not answer that.";
    let addr = spawn(ScriptedBackend::new(vec![Ok(reply.to_string())])).await;

    let (status, body) = post(addr, "/api/llm/tech-stack", json!({ "summary": "A todo app" })).await;
    assert_eq!(status, 502);
    assert_eq!(body, json!({ "error": "Failed to generate tech stack recommendations" }));
    assert!(!body.to_string().contains(reply));
}

#[tokio::test]
async fn test_backend_failure_is_bad_gateway() {
    let addr = spawn(ScriptedBackend::new(vec![Err(BackendError::status(503, "down"))])).await;

    let (status, body) = post(addr, "/api/llm/schema", json!({ "summary": "A todo app" })).await;
    assert_eq!(status, 502);
    assert_eq!(body["error"], "Failed to generate schema");
}

#[tokio::test]
async fn test_unconfigured_backend_is_internal_error() {
    let backend = ScriptedBackend::unconfigured();
    let addr = spawn(backend.clone()).await;

    let (status, _) = post(addr, "/api/llm/schema", json!({ "summary": "A todo app" })).await;
    assert_eq!(status, 500);
    assert_eq!(backend.calls(), 0);
}

#[tokio::test]
async fn test_feature_tree_success() {
    let reply = json!({
        "features": [
            {
                "title": "Tasks",
                "description": "Task management",
                "priority": "high",
                "complexity": "medium",
                "estimatedHours": 20,
                "category": "backend",
                "children": [
                    {
                        "title": "Create task",
                        "description": "Form and endpoint",
                        "priority": "high",
                        "complexity": "low",
                        "estimatedHours": 6,
                        "category": "frontend",
                        "children": [
                            {
                                "title": "Task form",
                                "description": "Inputs and validation",
                                "priority": "medium",
                                "complexity": "low",
                                "estimatedHours": 3,
                                "category": "frontend"
                            }
                        ]
                    }
                ]
            }
        ]
    })
    .to_string();
    let addr = spawn(ScriptedBackend::new(vec![Ok(reply)])).await;

    let (status, body) = post(
        addr,
        "/api/llm/feature-tree",
        json!({
            "summary": "A todo app",
            "schema": { "tables": [] },
            "appStructure": { "pages": [] },
            "techStack": { "database": "SQLite" }
        }),
    )
    .await;
    assert_eq!(status, 200);
    let task = &body["features"][0]["children"][0]["children"][0];
    assert_eq!(task["id"], "feature-0-0-0");
    assert_eq!(task["status"], "planned");
}
