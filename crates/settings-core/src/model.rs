//! Schema Model and Settings Root traits

use crate::field::FieldDescriptor;
use crate::update::UpdateReport;
use crate::{Result, load, schema, update, validate};
use schemars::JsonSchema;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::fmt;
use std::path::Path;

/// A typed, validated group of configuration fields.
///
/// Implementors derive `Serialize`, `Deserialize` and `JsonSchema`, carry
/// `#[serde(default)]`, and declare a field table whose constraints match
/// their `#[schemars(...)]` attributes.
pub trait SchemaModel: Serialize + DeserializeOwned + JsonSchema + Default {
    /// Type name used for default file names and display output.
    const NAME: &'static str;

    /// One descriptor per serialized field.
    const FIELDS: &'static [FieldDescriptor];
}

/// A top-level settings aggregate.
///
/// All operations have default implementations; roots only opt in with an
/// empty `impl Settings for MyRoot {}`.
pub trait Settings: SchemaModel {
    /// Defaults with the override file at `user_file` deep-merged on top.
    ///
    /// A missing file yields pure defaults.
    fn load_with_overrides(user_file: Option<&Path>) -> Result<Self> {
        load::load_with_overrides(user_file)
    }

    /// Write updatable fields of `self` back into the existing file at `path`.
    fn update(&self, path: &Path) -> Result<UpdateReport> {
        update::update(self, path)
    }

    /// Write this type's JSON Schema to `base_path/output_file` and return it.
    fn generate_schema(&self, output_file: Option<&str>, base_path: Option<&Path>) -> Result<Value> {
        schema::export_schema::<Self>(output_file, base_path)
    }

    /// Re-check the live values against the field table.
    fn validate(&self) -> Result<()> {
        validate::validate_tree(&self.to_tree()?, Self::FIELDS)
    }

    /// Plain JSON tree of the current values.
    fn to_tree(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Render settings as pretty JSON wrapped in the type name.
///
/// Intended for `Display` impls:
///
/// ```text
/// {
///   "AppSettings": { ... }
/// }
/// ```
pub fn display_settings<T: SchemaModel>(settings: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let tree = serde_json::to_value(settings).map_err(|_| fmt::Error)?;
    let mut wrapper = Map::new();
    wrapper.insert(T::NAME.to_string(), tree);
    let rendered = serde_json::to_string_pretty(&Value::Object(wrapper)).map_err(|_| fmt::Error)?;
    f.write_str(&rendered)
}
