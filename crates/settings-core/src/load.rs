//! Merge/Load engine
//!
//! Builds defaults, serializes them to a tree, deep-merges the override
//! document on top, validates the merged tree and deserializes the result.

use crate::merge::{MergeOptions, deep_merge};
use crate::model::SchemaModel;
use crate::validate::validate_tree;
use crate::{Error, Result};
use serde_json::Value;
use std::path::Path;

/// Load settings with the override file at `user_file` applied.
///
/// Uses [`MergeOptions::default`], i.e. arrays are replaced wholesale.
pub fn load_with_overrides<T: SchemaModel>(user_file: Option<&Path>) -> Result<T> {
    load_with_options(user_file, MergeOptions::default())
}

/// Load settings with the override file at `user_file` applied.
///
/// `None`, or a path that is not an existing file, yields `T::default()`.
/// Malformed JSON fails with [`Error::Parse`]; a merged tree that violates
/// the field table fails with [`Error::Validation`].
pub fn load_with_options<T: SchemaModel>(
    user_file: Option<&Path>,
    options: MergeOptions,
) -> Result<T> {
    let Some(path) = user_file else {
        return Ok(T::default());
    };

    if !path.is_file() {
        tracing::debug!(?path, settings = T::NAME, "No override file found; using defaults");
        return Ok(T::default());
    }

    tracing::debug!(?path, settings = T::NAME, "Loading override file");
    let overrides = settings_fs::read_json(path)?;
    load_from_value(&overrides, options)
}

/// Merge an in-memory override document onto defaults.
pub fn load_from_value<T: SchemaModel>(overrides: &Value, options: MergeOptions) -> Result<T> {
    if !overrides.is_object() {
        return Err(Error::validation(
            "<root>",
            "override document must be a JSON object",
        ));
    }

    let mut tree = serde_json::to_value(T::default())?;
    deep_merge(&mut tree, overrides, options);
    from_tree(tree)
}

/// Validate a complete tree and build the typed value from it.
pub fn from_tree<T: SchemaModel>(tree: Value) -> Result<T> {
    validate_tree(&tree, T::FIELDS)?;
    serde_json::from_value(tree).map_err(|e| Error::validation(T::NAME, e.to_string()))
}
