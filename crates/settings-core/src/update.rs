//! Update/Write-back engine
//!
//! Syncs an existing JSON file with a live settings value. Only keys already
//! in the file are considered; the file is never extended with new keys.

use crate::field::{FieldDescriptor, descriptor};
use crate::model::SchemaModel;
use crate::{Result, join_path};
use serde_json::Value;
use std::path::Path;

/// Outcome of a write-back, as dotted field paths
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateReport {
    /// Fields whose stored value changed
    pub updated: Vec<String>,
    /// Protected fields left untouched
    pub skipped: Vec<String>,
}

impl UpdateReport {
    /// True when no protected field was encountered.
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Write the updatable fields of `settings` into the file at `path`.
///
/// The file must already exist. It is rewritten as pretty-printed UTF-8 JSON
/// only after the whole tree has been synced in memory.
pub fn update<T: SchemaModel>(settings: &T, path: &Path) -> Result<UpdateReport> {
    let mut document = settings_fs::read_json(path)?;
    let model = serde_json::to_value(settings)?;

    let report = sync_document(&mut document, &model, T::FIELDS);

    settings_fs::write_json_pretty(path, &document)?;
    tracing::debug!(
        ?path,
        settings = T::NAME,
        updated = report.updated.len(),
        skipped = report.skipped.len(),
        "Wrote settings back"
    );
    Ok(report)
}

/// Sync `document` in place from `model`, a serialized settings tree.
///
/// For each key in `document`:
/// - absent from `model`: left untouched
/// - object in both: recursed into with the nested field table
/// - otherwise: replaced by the model value unless the field is protected
///
/// A field without a descriptor counts as updatable.
pub fn sync_document(document: &mut Value, model: &Value, fields: &[FieldDescriptor]) -> UpdateReport {
    let mut report = UpdateReport::default();
    sync_object(document, model, fields, "", &mut report);
    report
}

fn sync_object(
    document: &mut Value,
    model: &Value,
    fields: &[FieldDescriptor],
    prefix: &str,
    report: &mut UpdateReport,
) {
    let (Value::Object(stored), Value::Object(current)) = (document, model) else {
        return;
    };

    for (key, stored_value) in stored.iter_mut() {
        let Some(current_value) = current.get(key) else {
            continue;
        };
        let path = join_path(prefix, key);
        let field = descriptor(fields, key);

        if stored_value.is_object() && current_value.is_object() {
            let nested = field.and_then(FieldDescriptor::nested_fields).unwrap_or(&[]);
            sync_object(stored_value, current_value, nested, &path, report);
            continue;
        }

        if field.is_none_or(|f| f.updatable) {
            if stored_value != current_value {
                *stored_value = current_value.clone();
                report.updated.push(path);
            }
        } else {
            tracing::warn!(field = %path, "Field is not updatable; keeping stored value");
            report.skipped.push(path);
        }
    }
}
