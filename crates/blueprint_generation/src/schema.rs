//! Declarative description of the expected result shape.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

/// JSON Schema dialect advertised in format instructions.
pub const JSON_SCHEMA_DIALECT: &str = "http://json-schema.org/draft-07/schema#";

/// The type of a schema node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldKind {
    /// Any JSON string
    String,
    /// Any JSON number
    Number,
    /// `true` or `false`
    Boolean,
    /// A string drawn from a fixed set
    Enum {
        /// Allowed values
        values: Vec<String>,
    },
    /// A nested object
    Object {
        /// Declared fields, in order
        fields: Vec<Field>,
    },
    /// A homogeneous array
    Array {
        /// Element type
        items: Box<FieldKind>,
    },
}

impl FieldKind {
    /// Enum over the given values.
    pub fn one_of<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FieldKind::Enum {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Nested object with the given fields.
    pub fn object(fields: Vec<Field>) -> Self {
        FieldKind::Object { fields }
    }

    /// Array of `items`.
    pub fn array_of(items: FieldKind) -> Self {
        FieldKind::Array {
            items: Box::new(items),
        }
    }

    /// Name used in validation messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Number => "number",
            FieldKind::Boolean => "boolean",
            FieldKind::Enum { .. } => "enum string",
            FieldKind::Object { .. } => "object",
            FieldKind::Array { .. } => "array",
        }
    }

    fn to_json_schema(&self, description: Option<&str>) -> Value {
        let mut node = match self {
            FieldKind::String => json!({ "type": "string" }),
            FieldKind::Number => json!({ "type": "number" }),
            FieldKind::Boolean => json!({ "type": "boolean" }),
            FieldKind::Enum { values } => json!({ "type": "string", "enum": values }),
            FieldKind::Object { fields } => object_schema(fields),
            FieldKind::Array { items } => json!({ "type": "array", "items": items.to_json_schema(None) }),
        };

        if let (Some(description), Value::Object(map)) = (description, &mut node) {
            map.insert("description".to_string(), Value::String(description.to_string()));
        }
        node
    }
}

/// A named field of an object.
///
/// # Examples
///
/// ```
/// use blueprint_generation::{Field, FieldKind};
///
/// let field = Field::string("relations")
///     .optional()
///     .describe("Relations in the format tableName.fieldName");
///
/// assert_eq!(field.name(), "relations");
/// assert!(*field.is_optional());
/// assert_eq!(field.kind(), &FieldKind::String);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Field {
    /// Property name
    name: String,
    /// Value type
    #[serde(flatten)]
    kind: FieldKind,
    /// Whether the field may be absent or `null`
    #[serde(default)]
    #[getter(rename = "is_optional")]
    optional: bool,
    /// Human-readable hint for the model
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl Field {
    /// Required field of the given kind.
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            optional: false,
            description: None,
        }
    }

    /// Required string field.
    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::String)
    }

    /// Required number field.
    pub fn number(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Number)
    }

    /// Required boolean field.
    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Boolean)
    }

    /// Required enum field.
    pub fn one_of<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(name, FieldKind::one_of(values))
    }

    /// Required nested object field.
    pub fn object(name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self::new(name, FieldKind::object(fields))
    }

    /// Required array field.
    pub fn array(name: impl Into<String>, items: FieldKind) -> Self {
        Self::new(name, FieldKind::array_of(items))
    }

    /// Marks the field optional.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Attaches a description.
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// The expected shape of a structured result. The root is always an object.
///
/// # Examples
///
/// ```
/// use blueprint_generation::{Field, OutputSchema};
///
/// let schema = OutputSchema::new(vec![Field::number("a"), Field::number("b").optional()]);
/// let rendered = schema.to_json_schema();
///
/// assert_eq!(rendered["type"], "object");
/// assert_eq!(rendered["required"], serde_json::json!(["a"]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct OutputSchema {
    /// Root object fields
    fields: Vec<Field>,
}

impl OutputSchema {
    /// Creates a schema whose root object has `fields`.
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// Renders the schema as a draft-07 JSON Schema document.
    ///
    /// Object keys are emitted in a stable order, so the same schema always
    /// renders to the same bytes.
    pub fn to_json_schema(&self) -> Value {
        let mut root = object_schema(&self.fields);
        if let Value::Object(map) = &mut root {
            map.insert(
                "$schema".to_string(),
                Value::String(JSON_SCHEMA_DIALECT.to_string()),
            );
        }
        root
    }
}

fn object_schema(fields: &[Field]) -> Value {
    let mut properties = Map::new();
    let mut required = Vec::new();

    for field in fields {
        properties.insert(
            field.name.clone(),
            field.kind.to_json_schema(field.description.as_deref()),
        );
        if !field.optional {
            required.push(Value::String(field.name.clone()));
        }
    }

    json!({
        "type": "object",
        "properties": properties,
        "required": required,
        "additionalProperties": false,
    })
}
