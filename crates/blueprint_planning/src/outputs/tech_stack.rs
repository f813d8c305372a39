//! Technology stack recommendation.

use blueprint_generation::{Field, FieldKind, OutputSchema};
use serde::{Deserialize, Serialize};

/// Recommended technologies for a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechStackRecommendation {
    pub frontend_framework: String,
    pub backend_framework: String,
    pub database: String,
    pub authentication_service: String,
    pub hosting_service: String,
    pub additional_libraries: Vec<LibraryRecommendation>,
    /// Reasoning behind the recommendations
    pub reasoning: String,
}

/// A supporting library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibraryRecommendation {
    pub name: String,
    pub purpose: String,
    pub recommendation: String,
}

impl TechStackRecommendation {
    /// Output schema sent to the model.
    pub fn output_schema() -> OutputSchema {
        OutputSchema::new(vec![
            Field::string("frontendFramework").describe("Recommended frontend framework"),
            Field::string("backendFramework").describe("Recommended backend framework"),
            Field::string("database").describe("Recommended database technology"),
            Field::string("authenticationService").describe("Recommended authentication service"),
            Field::string("hostingService").describe("Recommended hosting service"),
            Field::array(
                "additionalLibraries",
                FieldKind::object(vec![
                    Field::string("name").describe("Library name"),
                    Field::string("purpose").describe("What this library is used for"),
                    Field::string("recommendation").describe("Why this library is recommended"),
                ]),
            ),
            Field::string("reasoning")
                .describe("Reasoning behind these technology recommendations"),
        ])
    }
}
