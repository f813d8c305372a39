//! Application structure suggestion.

use blueprint_generation::{Field, FieldKind, OutputSchema};
use serde::{Deserialize, Serialize};

/// Pages and components suggested for a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppStructureSuggestion {
    /// Suggested pages
    pub pages: Vec<PageSuggestion>,
    /// Follow-up recommendations
    pub recommendations: AppRecommendations,
}

/// A suggested page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSuggestion {
    /// Page name
    pub name: String,
    /// Route, e.g. `/dashboard`
    pub route: String,
    /// What the page is for
    pub description: String,
    /// Components on the page
    pub components: Vec<ComponentSuggestion>,
}

/// A suggested UI component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentSuggestion {
    /// Component name
    pub name: String,
    /// What the component does
    pub description: String,
    /// Data the component needs
    pub data_requirements: Vec<String>,
}

/// Extra pages and authentication advice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppRecommendations {
    /// Additional pages that might be useful
    pub additional_pages: Vec<String>,
    /// Authentication requirements
    pub authentication: String,
}

impl AppStructureSuggestion {
    /// Output schema sent to the model.
    pub fn output_schema() -> OutputSchema {
        let component = FieldKind::object(vec![
            Field::string("name").describe("The name of the component"),
            Field::string("description").describe("What this component does"),
            Field::array("dataRequirements", FieldKind::String)
                .describe("What data this component needs"),
        ]);

        let page = FieldKind::object(vec![
            Field::string("name").describe("The name of the page"),
            Field::string("route").describe("The route for this page (e.g., /dashboard)"),
            Field::string("description").describe("A description of what this page is for"),
            Field::array("components", component),
        ]);

        OutputSchema::new(vec![
            Field::array("pages", page),
            Field::object(
                "recommendations",
                vec![
                    Field::array("additionalPages", FieldKind::String)
                        .describe("Recommendations for additional pages that might be useful"),
                    Field::string("authentication")
                        .describe("Recommendations for authentication requirements"),
                ],
            ),
        ])
    }
}
