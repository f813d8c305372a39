//! Local validation of parsed values against an [`OutputSchema`].

use crate::{Field, FieldKind, OutputSchema};
use blueprint_error::ValidationError;
use serde_json::{Map, Value};

/// Validates `value` against `schema`, returning the normalised value.
///
/// Required fields must be present and non-null; optional fields may be
/// absent or `null`. Keys the schema does not declare are dropped.
///
/// # Examples
///
/// ```
/// use blueprint_generation::{Field, OutputSchema, validate};
/// use serde_json::json;
///
/// let schema = OutputSchema::new(vec![Field::number("a"), Field::number("b")]);
/// let err = validate(&json!({ "b": 1 }), &schema).unwrap_err();
/// assert_eq!(err.path, "$.a");
/// ```
pub fn validate(value: &Value, schema: &OutputSchema) -> Result<Value, ValidationError> {
    match value {
        Value::Object(map) => validate_fields(map, schema.fields(), "$").map(Value::Object),
        other => Err(ValidationError::new(
            "$",
            format!("expected object, found {}", json_type_name(other)),
        )),
    }
}

fn validate_fields(
    map: &Map<String, Value>,
    fields: &[Field],
    path: &str,
) -> Result<Map<String, Value>, ValidationError> {
    let mut out = Map::new();

    for field in fields {
        let field_path = format!("{}.{}", path, field.name());
        match map.get(field.name()) {
            None if *field.is_optional() => {}
            Some(Value::Null) if *field.is_optional() => {
                out.insert(field.name().clone(), Value::Null);
            }
            None => {
                return Err(ValidationError::new(field_path, "missing required field"));
            }
            Some(Value::Null) => {
                return Err(ValidationError::new(field_path, "required field is null"));
            }
            Some(value) => {
                out.insert(
                    field.name().clone(),
                    validate_kind(value, field.kind(), &field_path)?,
                );
            }
        }
    }

    Ok(out)
}

fn validate_kind(value: &Value, kind: &FieldKind, path: &str) -> Result<Value, ValidationError> {
    match (kind, value) {
        (FieldKind::String, Value::String(_))
        | (FieldKind::Number, Value::Number(_))
        | (FieldKind::Boolean, Value::Bool(_)) => Ok(value.clone()),
        (FieldKind::Enum { values }, Value::String(s)) => {
            if values.iter().any(|allowed| allowed == s) {
                Ok(value.clone())
            } else {
                Err(ValidationError::new(
                    path,
                    format!("'{}' is not one of [{}]", s, values.join(", ")),
                ))
            }
        }
        (FieldKind::Object { fields }, Value::Object(map)) => {
            validate_fields(map, fields, path).map(Value::Object)
        }
        (FieldKind::Array { items }, Value::Array(elements)) => elements
            .iter()
            .enumerate()
            .map(|(index, element)| validate_kind(element, items, &format!("{}[{}]", path, index)))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        (expected, found) => Err(ValidationError::new(
            path,
            format!(
                "expected {}, found {}",
                expected.type_name(),
                json_type_name(found)
            ),
        )),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
