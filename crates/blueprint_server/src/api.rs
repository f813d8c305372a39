//! HTTP API for the planning use-cases.

use crate::ApiError;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use blueprint_interface::CompletionBackend;
use blueprint_planning::{
    AppStructureSuggestion, DatabaseSchemaSuggestion, FeatureTree, ProjectPlanner,
    TechStackRecommendation,
};
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{info, instrument};

/// API server state.
pub struct ApiState<B> {
    /// Shared planner
    pub planner: Arc<ProjectPlanner<B>>,
}

impl<B> Clone for ApiState<B> {
    fn clone(&self) -> Self {
        Self {
            planner: Arc::clone(&self.planner),
        }
    }
}

impl<B> ApiState<B> {
    /// Creates a new API state.
    pub fn new(planner: ProjectPlanner<B>) -> Self {
        Self {
            planner: Arc::new(planner),
        }
    }
}

/// Body of `POST /api/llm/schema` and `POST /api/llm/tech-stack`.
#[derive(Debug, Default, Deserialize)]
pub struct SummaryRequest {
    #[serde(default)]
    pub summary: Option<String>,
}

/// Body of `POST /api/llm/app-structure`.
#[derive(Debug, Default, Deserialize)]
pub struct AppStructureRequest {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub schema: Option<Value>,
}

/// Body of `POST /api/llm/feature-tree`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureTreeRequest {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub schema: Option<Value>,
    #[serde(default)]
    pub app_structure: Option<Value>,
    #[serde(default)]
    pub tech_stack: Option<Value>,
}

/// Creates the API router.
pub fn create_router<B>(planner: ProjectPlanner<B>) -> Router
where
    B: CompletionBackend + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .route("/api/llm/schema", post(generate_schema::<B>))
        .route("/api/llm/app-structure", post(generate_app_structure::<B>))
        .route("/api/llm/tech-stack", post(generate_tech_stack::<B>))
        .route("/api/llm/feature-tree", post(generate_feature_tree::<B>))
        .with_state(ApiState::new(planner))
}

/// Health check endpoint.
#[instrument(skip_all)]
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

#[instrument(skip_all)]
async fn generate_schema<B: CompletionBackend + 'static>(
    State(state): State<ApiState<B>>,
    payload: Result<Json<SummaryRequest>, JsonRejection>,
) -> Result<Json<DatabaseSchemaSuggestion>, ApiError> {
    let Json(body) = payload.map_err(|e| ApiError::InvalidBody(e.body_text()))?;
    let summary = require_text(body.summary, "Project summary")?;

    let suggestion = state
        .planner
        .suggest_schema(&summary)
        .await
        .map_err(|source| ApiError::Generation {
            artefact: "schema",
            source,
        })?;
    info!(tables = suggestion.tables.len(), "Schema request served");
    Ok(Json(suggestion))
}

#[instrument(skip_all)]
async fn generate_app_structure<B: CompletionBackend + 'static>(
    State(state): State<ApiState<B>>,
    payload: Result<Json<AppStructureRequest>, JsonRejection>,
) -> Result<Json<AppStructureSuggestion>, ApiError> {
    let Json(body) = payload.map_err(|e| ApiError::InvalidBody(e.body_text()))?;
    let summary = require_text(body.summary, "Project summary")?;
    let schema = require_value(body.schema, "Schema")?;

    let suggestion = state
        .planner
        .suggest_app_structure(&summary, &schema)
        .await
        .map_err(|source| ApiError::Generation {
            artefact: "app structure",
            source,
        })?;
    info!(pages = suggestion.pages.len(), "App structure request served");
    Ok(Json(suggestion))
}

#[instrument(skip_all)]
async fn generate_tech_stack<B: CompletionBackend + 'static>(
    State(state): State<ApiState<B>>,
    payload: Result<Json<SummaryRequest>, JsonRejection>,
) -> Result<Json<TechStackRecommendation>, ApiError> {
    let Json(body) = payload.map_err(|e| ApiError::InvalidBody(e.body_text()))?;
    let summary = require_text(body.summary, "Project summary")?;

    let recommendation = state
        .planner
        .recommend_tech_stack(&summary)
        .await
        .map_err(|source| ApiError::Generation {
            artefact: "tech stack recommendations",
            source,
        })?;
    info!("Tech stack request served");
    Ok(Json(recommendation))
}

#[instrument(skip_all)]
async fn generate_feature_tree<B: CompletionBackend + 'static>(
    State(state): State<ApiState<B>>,
    payload: Result<Json<FeatureTreeRequest>, JsonRejection>,
) -> Result<Json<FeatureTree>, ApiError> {
    let Json(body) = payload.map_err(|e| ApiError::InvalidBody(e.body_text()))?;
    let summary = require_text(body.summary, "Project summary")?;
    let schema = require_value(body.schema, "Schema")?;
    let app_structure = require_value(body.app_structure, "App structure")?;
    let tech_stack = require_value(body.tech_stack, "Tech stack")?;

    let tree = state
        .planner
        .build_feature_tree(&summary, &schema, &app_structure, &tech_stack)
        .await
        .map_err(|source| ApiError::Generation {
            artefact: "feature tree",
            source,
        })?;
    info!(nodes = tree.node_count(), "Feature tree request served");
    Ok(Json(tree))
}

fn require_text(value: Option<String>, name: &'static str) -> Result<String, ApiError> {
    value
        .filter(|text| !text.trim().is_empty())
        .ok_or(ApiError::MissingInput(name))
}

fn require_value(value: Option<Value>, name: &'static str) -> Result<Value, ApiError> {
    value
        .filter(|v| !v.is_null())
        .ok_or(ApiError::MissingInput(name))
}
