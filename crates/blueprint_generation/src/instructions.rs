//! Prompt assembly.
//!
//! Format instructions are a pure function of the schema (and the strict
//! flag): the same inputs always produce byte-identical text.

use crate::OutputSchema;

/// Formatting rules appended after the rendered schema.
pub const FORMAT_RULES: [&str; 7] = [
    "Your entire response must be valid JSON that matches the schema.",
    "Do NOT include additional text, explanations, or code blocks around the JSON.",
    "Do NOT use escape characters in strings that don't need them.",
    "Ensure all property names match exactly as specified in the schema.",
    "Make sure all required properties are included.",
    "Use null for optional properties you choose not to include.",
    "For array properties, always return an array, even if empty.",
];

/// Extra rule used when retrying after a malformed reply.
pub const STRICT_RULE: &str =
    "Your previous answer could not be used. Start your response with { and end it with }, with nothing before or after.";

/// Machine-readable instructions derived from `schema`.
///
/// # Examples
///
/// ```
/// use blueprint_generation::{Field, OutputSchema, format_instructions};
///
/// let schema = OutputSchema::new(vec![Field::number("a")]);
/// assert_eq!(format_instructions(&schema, false), format_instructions(&schema.clone(), false));
/// assert!(format_instructions(&schema, false).contains("\"required\":[\"a\"]"));
/// ```
pub fn format_instructions(schema: &OutputSchema, strict: bool) -> String {
    let schema_json = schema.to_json_schema().to_string();

    let mut out = String::new();
    out.push_str("You must respond with a JSON object that conforms to this schema:\n");
    out.push_str(&schema_json);
    out.push_str("\n\nImportant guidelines:\n");

    let rules = FORMAT_RULES
        .iter()
        .copied()
        .chain(strict.then_some(STRICT_RULE));
    for (index, rule) in rules.enumerate() {
        out.push_str(&format!("{}. {}\n", index + 1, rule));
    }
    out
}

/// The caller's instruction followed by the format instructions.
pub fn assemble_prompt(instruction: &str, schema: &OutputSchema, strict: bool) -> String {
    format!(
        "{}\n\n{}",
        instruction.trim_end(),
        format_instructions(schema, strict)
    )
}
