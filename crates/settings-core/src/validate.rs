//! Tree validation against field tables

use crate::field::{FieldDescriptor, FieldKind};
use crate::{Error, Result, join_path};
use serde_json::Value;

const ROOT: &str = "<root>";

/// Validate a JSON tree against a field table.
///
/// Checks each declared field that is present in `tree`. Keys the table does
/// not declare are ignored; declared keys missing from `tree` are left to the
/// type's serde defaults. The first violation is returned with its dotted
/// field path.
pub fn validate_tree(tree: &Value, fields: &[FieldDescriptor]) -> Result<()> {
    validate_object(tree, fields, "")
}

fn validate_object(tree: &Value, fields: &[FieldDescriptor], prefix: &str) -> Result<()> {
    let Value::Object(map) = tree else {
        let field = if prefix.is_empty() { ROOT } else { prefix };
        return Err(Error::validation(
            field,
            format!("expected an object, found {}", json_type(tree)),
        ));
    };

    for field in fields {
        if let Some(value) = map.get(field.name) {
            check_field(field, value, &join_path(prefix, field.name))?;
        }
    }
    Ok(())
}

fn check_field(field: &FieldDescriptor, value: &Value, path: &str) -> Result<()> {
    let type_ok = match field.kind {
        FieldKind::Integer => value.is_i64() || value.is_u64(),
        FieldKind::Float => value.is_number(),
        FieldKind::String => value.is_string(),
        FieldKind::List => value.is_array(),
        FieldKind::Enum(choices) => {
            let Some(text) = value.as_str() else {
                return Err(type_error(path, "a string", value));
            };
            if !choices.contains(&text) {
                return Err(Error::validation(
                    path,
                    format!("`{text}` is not one of {}", choices.join(", ")),
                ));
            }
            true
        }
        FieldKind::Group(nested) => return validate_object(value, nested, path),
    };

    if !type_ok {
        let expected = match field.kind {
            FieldKind::Integer => "an integer",
            FieldKind::Float => "a number",
            FieldKind::List => "an array",
            _ => "a string",
        };
        return Err(type_error(path, expected, value));
    }

    if let Some(number) = value.as_f64() {
        if let Some(minimum) = field.minimum.filter(|min| number < *min) {
            return Err(Error::validation(
                path,
                format!("must be >= {minimum}, got {value}"),
            ));
        }
        if let Some(maximum) = field.maximum.filter(|max| number > *max) {
            return Err(Error::validation(
                path,
                format!("must be <= {maximum}, got {value}"),
            ));
        }
    }
    Ok(())
}

fn type_error(path: &str, expected: &str, found: &Value) -> Error {
    Error::validation(path, format!("expected {expected}, found {}", json_type(found)))
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(n) if n.is_f64() => "a float",
        Value::Number(_) => "an integer",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
