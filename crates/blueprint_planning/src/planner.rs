//! Planning use-cases.

use crate::prompts::{app_structure_prompt, feature_tree_prompt, schema_prompt, tech_stack_prompt};
use crate::{
    AppStructureSuggestion, DatabaseSchemaSuggestion, FeatureTree, GeneratedFeatureTree,
    PlannerSettings, TechStackRecommendation,
};
use blueprint_error::GenerationResult;
use blueprint_generation::{GenerationRequest, OutputSchema, StructuredGenerator};
use blueprint_interface::CompletionBackend;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{info, instrument};

/// Generates planning artefacts for a project summary.
///
/// Prior artefacts are accepted as JSON values so that callers can pass
/// either typed results (via `serde_json::to_value`) or edited documents.
#[derive(Debug, Clone)]
pub struct ProjectPlanner<B> {
    generator: StructuredGenerator<B>,
    settings: PlannerSettings,
}

impl<B: CompletionBackend> ProjectPlanner<B> {
    /// Creates a planner over `backend` with default settings.
    pub fn new(backend: B) -> Self {
        Self::with_settings(backend, PlannerSettings::default())
    }

    /// Creates a planner over `backend`.
    pub fn with_settings(backend: B, settings: PlannerSettings) -> Self {
        Self {
            generator: StructuredGenerator::new(backend),
            settings,
        }
    }

    /// Suggests tables and fields for the project.
    #[instrument(skip(self, summary), fields(summary_len = summary.len()))]
    pub async fn suggest_schema(&self, summary: &str) -> GenerationResult<DatabaseSchemaSuggestion> {
        let suggestion: DatabaseSchemaSuggestion = self
            .run(schema_prompt(summary), DatabaseSchemaSuggestion::output_schema())
            .await?;
        info!(tables = suggestion.tables.len(), "Generated database schema");
        Ok(suggestion)
    }

    /// Suggests pages and components given a database schema.
    #[instrument(skip(self, summary, schema), fields(summary_len = summary.len()))]
    pub async fn suggest_app_structure(
        &self,
        summary: &str,
        schema: &Value,
    ) -> GenerationResult<AppStructureSuggestion> {
        let suggestion: AppStructureSuggestion = self
            .run(
                app_structure_prompt(summary, schema),
                AppStructureSuggestion::output_schema(),
            )
            .await?;
        info!(pages = suggestion.pages.len(), "Generated app structure");
        Ok(suggestion)
    }

    /// Recommends a technology stack.
    #[instrument(skip(self, summary), fields(summary_len = summary.len()))]
    pub async fn recommend_tech_stack(
        &self,
        summary: &str,
    ) -> GenerationResult<TechStackRecommendation> {
        let recommendation: TechStackRecommendation = self
            .run(tech_stack_prompt(summary), TechStackRecommendation::output_schema())
            .await?;
        info!(
            frontend = %recommendation.frontend_framework,
            backend = %recommendation.backend_framework,
            "Generated tech stack"
        );
        Ok(recommendation)
    }

    /// Builds a three-level roadmap from the prior artefacts.
    #[instrument(skip_all, fields(summary_len = summary.len()))]
    pub async fn build_feature_tree(
        &self,
        summary: &str,
        schema: &Value,
        app_structure: &Value,
        tech_stack: &Value,
    ) -> GenerationResult<FeatureTree> {
        let generated: GeneratedFeatureTree = self
            .run(
                feature_tree_prompt(summary, schema, app_structure, tech_stack),
                FeatureTree::output_schema(),
            )
            .await?;

        let tree = FeatureTree::from_generated(generated);
        info!(
            categories = tree.features.len(),
            nodes = tree.node_count(),
            "Generated feature tree"
        );
        Ok(tree)
    }

    async fn run<T: DeserializeOwned>(
        &self,
        instruction: String,
        schema: OutputSchema,
    ) -> GenerationResult<T> {
        let request = GenerationRequest::new(instruction, schema, *self.settings.parameters());
        let generator = &self.generator;
        self.settings
            .retry()
            .run(request, |request| async move {
                generator.generate::<T>(&request).await
            })
            .await
    }
}
