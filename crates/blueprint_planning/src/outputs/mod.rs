//! Typed planning artefacts and their output schemas.

mod app_structure;
mod database_schema;
mod feature_tree;
mod tech_stack;

pub use app_structure::{
    AppRecommendations, AppStructureSuggestion, ComponentSuggestion, PageSuggestion,
};
pub use database_schema::{
    ColumnSuggestion, DatabaseSchemaSuggestion, SchemaRecommendations, TableSuggestion,
};
pub use feature_tree::{
    DevelopmentCategory, FeatureNode, FeatureStatus, FeatureTree, GeneratedFeature,
    GeneratedFeatureTree, Level,
};
pub use tech_stack::{LibraryRecommendation, TechStackRecommendation};
