//! Database schema suggestion.

use blueprint_generation::{Field, FieldKind, OutputSchema};
use serde::{Deserialize, Serialize};

/// Tables and fields suggested for a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseSchemaSuggestion {
    /// Suggested tables
    pub tables: Vec<TableSuggestion>,
    /// Follow-up recommendations
    pub recommendations: SchemaRecommendations,
}

/// A suggested table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableSuggestion {
    /// Table name
    pub name: String,
    /// What the table represents
    pub description: String,
    /// Columns
    pub fields: Vec<ColumnSuggestion>,
}

/// A suggested column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnSuggestion {
    /// Column name
    pub name: String,
    /// Data type (text, uuid, integer, boolean, timestamp, jsonb, float)
    #[serde(rename = "type")]
    pub data_type: String,
    /// What the column represents
    pub description: String,
    /// Whether the column is required
    pub required: bool,
    /// Relation in the form `tableName.fieldName`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relations: Option<String>,
}

/// Extra tables and indexes worth considering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaRecommendations {
    /// Additional tables that might be useful
    pub additional_tables: Vec<String>,
    /// Indexes that might improve performance
    pub suggested_indexes: Vec<String>,
}

impl DatabaseSchemaSuggestion {
    /// Output schema sent to the model.
    pub fn output_schema() -> OutputSchema {
        let column = FieldKind::object(vec![
            Field::string("name").describe("The name of the field"),
            Field::string("type").describe(
                "The data type of the field (text, uuid, integer, boolean, timestamp, jsonb, float)",
            ),
            Field::string("description").describe("A description of what this field represents"),
            Field::boolean("required").describe("Whether this field is required"),
            Field::string("relations")
                .optional()
                .describe("Relations to other tables in the format tableName.fieldName"),
        ]);

        let table = FieldKind::object(vec![
            Field::string("name").describe("The name of the table"),
            Field::string("description").describe("A description of what this table represents"),
            Field::array("fields", column),
        ]);

        OutputSchema::new(vec![
            Field::array("tables", table),
            Field::object(
                "recommendations",
                vec![
                    Field::array("additionalTables", FieldKind::String)
                        .describe("Recommendations for additional tables that might be useful"),
                    Field::array("suggestedIndexes", FieldKind::String)
                        .describe("Suggestions for indexes that might improve performance"),
                ],
            ),
        ])
    }
}
