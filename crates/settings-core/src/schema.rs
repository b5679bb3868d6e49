//! Schema Exporter
//!
//! The JSON Schema comes from the type's `schemars` derive. It describes the
//! type (names, types, defaults, `minimum`/`maximum`, `enum`, and the
//! `updatable` keyword), never the current values of an instance.

use crate::field::{FieldDescriptor, FieldKind};
use crate::model::SchemaModel;
use crate::{Error, Result, join_path};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Default export file name, e.g. `AppSettings.schema.json`.
pub fn default_schema_file_name<T: SchemaModel>() -> String {
    format!("{}.schema.json", T::NAME)
}

/// The JSON Schema document of `T`.
pub fn schema_document<T: SchemaModel>() -> Result<Value> {
    Ok(serde_json::to_value(schemars::schema_for!(T))?)
}

/// Write the schema of `T` to `base_path/output_file` and return it.
///
/// `output_file` defaults to [`default_schema_file_name`]; without a
/// `base_path` the file name is used as given (relative to the working
/// directory).
pub fn export_schema<T: SchemaModel>(
    output_file: Option<&str>,
    base_path: Option<&Path>,
) -> Result<Value> {
    let schema = schema_document::<T>()?;

    let file_name = output_file
        .map(str::to_owned)
        .unwrap_or_else(default_schema_file_name::<T>);
    let path = match base_path {
        Some(base) => base.join(&file_name),
        None => PathBuf::from(&file_name),
    };

    settings_fs::write_json_pretty(&path, &schema)?;
    tracing::info!(path = %path.display(), "Schema saved");
    Ok(schema)
}

/// Check that `schema` declares the same constraints as `T::FIELDS`.
///
/// Compares, per field, the JSON type, `minimum`, `maximum`, `enum` choices
/// and the `updatable` keyword. Catches field tables drifting away from the
/// `#[schemars(...)]` attributes.
pub fn verify_schema<T: SchemaModel>(schema: &Value) -> Result<()> {
    verify_object(schema, schema, T::FIELDS, "")
}

fn verify_object(root: &Value, object: &Value, fields: &[FieldDescriptor], prefix: &str) -> Result<()> {
    let object = resolve(root, object);
    let properties = object
        .get("properties")
        .and_then(Value::as_object)
        .ok_or_else(|| mismatch(prefix, "schema declares no properties"))?;

    for field in fields {
        let path = join_path(prefix, field.name);
        let property = properties
            .get(field.name)
            .ok_or_else(|| mismatch(&path, "missing from schema"))?;
        let resolved = resolve(root, property);

        compare_bound(&path, "minimum", field.minimum, property, resolved)?;
        compare_bound(&path, "maximum", field.maximum, property, resolved)?;

        let updatable = property
            .get("updatable")
            .or_else(|| resolved.get("updatable"))
            .and_then(Value::as_bool)
            .unwrap_or(true);
        if updatable != field.updatable {
            return Err(mismatch(
                &path,
                format!("schema says updatable={updatable}, table says {}", field.updatable),
            ));
        }

        let expected_type = match field.kind {
            FieldKind::Integer => "integer",
            FieldKind::Float => "number",
            FieldKind::String | FieldKind::Enum(_) => "string",
            FieldKind::List => "array",
            FieldKind::Group(_) => "object",
        };
        if let Some(actual) = resolved.get("type").and_then(Value::as_str) {
            if actual != expected_type {
                return Err(mismatch(
                    &path,
                    format!("schema type `{actual}`, table type `{expected_type}`"),
                ));
            }
        }

        match field.kind {
            FieldKind::Enum(choices) => {
                let declared: Vec<&str> = resolved
                    .get("enum")
                    .and_then(Value::as_array)
                    .map(|items| items.iter().filter_map(Value::as_str).collect())
                    .unwrap_or_default();
                if declared != choices {
                    return Err(mismatch(
                        &path,
                        format!("schema enum {declared:?}, table enum {choices:?}"),
                    ));
                }
            }
            FieldKind::Group(nested) => verify_object(root, property, nested, &path)?,
            _ => {}
        }
    }
    Ok(())
}

fn compare_bound(
    path: &str,
    keyword: &str,
    expected: Option<f64>,
    property: &Value,
    resolved: &Value,
) -> Result<()> {
    let Some(expected) = expected else {
        return Ok(());
    };
    let actual = property
        .get(keyword)
        .or_else(|| resolved.get(keyword))
        .and_then(Value::as_f64);
    if actual != Some(expected) {
        return Err(mismatch(
            path,
            format!("schema {keyword} {actual:?}, table {keyword} {expected}"),
        ));
    }
    Ok(())
}

/// Follow a local `$ref` (directly or through a single-entry `allOf`).
fn resolve<'a>(root: &'a Value, schema: &'a Value) -> &'a Value {
    let reference = schema.get("$ref").or_else(|| {
        schema
            .get("allOf")
            .and_then(Value::as_array)
            .filter(|items| items.len() == 1)
            .and_then(|items| items[0].get("$ref"))
    });

    reference
        .and_then(Value::as_str)
        .and_then(|r| r.strip_prefix('#'))
        .and_then(|pointer| root.pointer(pointer))
        .unwrap_or(schema)
}

fn mismatch(field: &str, message: impl Into<String>) -> Error {
    let field = if field.is_empty() { "<root>" } else { field };
    Error::validation(field, message)
}
