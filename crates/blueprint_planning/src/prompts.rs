//! Prompt templates for the planning use-cases.
//!
//! Prior artefacts are embedded pretty-printed so the model sees the same
//! structure it produced earlier.

use serde_json::Value;

/// Database schema prompt.
pub fn schema_prompt(summary: &str) -> String {
    format!(
        "Based on the following project summary, suggest an appropriate database schema:\n\
         \n\
         PROJECT SUMMARY:\n\
         {summary}\n\
         \n\
         Generate a comprehensive database schema with appropriate tables and fields.\n\
         Consider common entities, relationships, and necessary fields for this type of project.\n\
         Include data types, descriptions, and relationships between tables."
    )
}

/// Application structure prompt.
pub fn app_structure_prompt(summary: &str, schema: &Value) -> String {
    format!(
        "Based on the following project summary and database schema, suggest an appropriate application structure:\n\
         \n\
         PROJECT SUMMARY:\n\
         {summary}\n\
         \n\
         DATABASE SCHEMA:\n\
         {schema:#}\n\
         \n\
         Generate a comprehensive application structure with appropriate pages and components.\n\
         Consider user flows, necessary screens, and components needed to interact with the database.\n\
         Include routes, descriptions, and data requirements for each component."
    )
}

/// Technology stack prompt.
pub fn tech_stack_prompt(summary: &str) -> String {
    format!(
        "Based on the following project summary, recommend an appropriate technology stack:\n\
         \n\
         PROJECT SUMMARY:\n\
         {summary}\n\
         \n\
         Recommend a comprehensive technology stack that would be appropriate for this project.\n\
         Consider the project requirements, scale, and potential future growth.\n\
         Include frontend, backend, database, authentication, hosting recommendations, and any additional libraries.\n\
         Provide reasoning for each recommendation."
    )
}

/// Feature roadmap prompt.
pub fn feature_tree_prompt(
    summary: &str,
    schema: &Value,
    app_structure: &Value,
    tech_stack: &Value,
) -> String {
    format!(
        "You are an experienced project manager tasked with creating a detailed project roadmap.\n\
         \n\
         PROJECT SUMMARY:\n\
         {summary}\n\
         \n\
         DATABASE SCHEMA:\n\
         {schema:#}\n\
         \n\
         APPLICATION STRUCTURE:\n\
         {app_structure:#}\n\
         \n\
         TECHNOLOGY STACK:\n\
         {tech_stack:#}\n\
         \n\
         Create a hierarchical feature tree that covers all aspects of developing this application:\n\
         \n\
         1. Level 1: Major feature categories (e.g., \"User Authentication\", \"Data Management\")\n\
         2. Level 2: Specific features within each category (e.g., \"Login System\", \"User Registration\")\n\
         3. Level 3: Individual tasks for implementing each feature (e.g., \"Create login form UI\", \"Implement password reset\")\n\
         \n\
         For each node in the tree, include:\n\
         - A descriptive title\n\
         - A detailed description explaining what needs to be done\n\
         - Priority level (high/medium/low)\n\
         - Complexity level (high/medium/low)\n\
         - Estimated hours to complete\n\
         - Development category (frontend, backend, database, devops, testing, documentation, or other)\n\
         \n\
         Make sure to cover all aspects of development including frontend, backend, database, testing, deployment, and documentation.\n\
         Be realistic with time estimates and prioritize features appropriately."
    )
}
