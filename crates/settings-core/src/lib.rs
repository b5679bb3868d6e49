//! Layered, schema-validated settings
//!
//! This crate turns plain serde structs into typed configuration objects
//! that can be:
//!
//! - **Loaded** from built-in defaults with a partial user override file
//!   deep-merged on top ([`load`])
//! - **Written back** field by field into an existing JSON file, honouring a
//!   per-field `updatable` policy ([`update`])
//! - **Described** as a JSON Schema document on disk ([`schema`])
//!
//! # Architecture
//!
//! ```text
//!        host application
//!               |
//!         settings-core        <- SchemaModel / Settings traits, engines
//!               |
//!         settings-fs          <- JSON reads, atomic writes
//! ```
//!
//! Each settings type exposes a static [`FieldDescriptor`] table next to its
//! serde and schemars derives. The engines consult that table instead of
//! reflecting on the type, and walk `serde_json::Value` trees to decide
//! between "recurse into a nested group" and "treat as a leaf".
//!
//! # Example
//!
//! ```ignore
//! use settings_core::Settings;
//!
//! let settings = AppSettings::load_with_overrides(Some(Path::new("AppSettings.user.json")))?;
//! settings.update(Path::new("AppSettings.user.json"))?;
//! settings.generate_schema(None, Some(Path::new("schemas")))?;
//! ```

pub mod error;
pub mod field;
pub mod load;
pub mod merge;
pub mod model;
pub mod schema;
pub mod store;
pub mod update;
pub mod validate;

#[cfg(test)]
pub(crate) mod fixtures;

pub use error::{Error, Result};
pub use field::{FieldDescriptor, FieldKind, descriptor};
pub use load::{from_tree, load_from_value, load_with_options, load_with_overrides};
pub use merge::{ArrayMerge, MergeOptions, deep_merge};
pub use model::{SchemaModel, Settings, display_settings};
pub use schema::{default_schema_file_name, export_schema, schema_document, verify_schema};
pub use store::SettingsStore;
pub use update::{UpdateReport, sync_document, update};
pub use validate::validate_tree;

/// Join a dotted field path, treating an empty prefix as the root.
pub(crate) fn join_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}.{name}")
    }
}
