//! Conventional settings file locations
//!
//! The explicit-path functions in [`load`](crate::load),
//! [`update`](crate::update) and [`schema`](crate::schema) are the primary
//! API. `SettingsStore` adds the `<TypeName>.user.json` /
//! `<TypeName>.schema.json` naming convention under one base directory.

use crate::merge::MergeOptions;
use crate::model::SchemaModel;
use crate::update::UpdateReport;
use crate::{Result, load, schema, update};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Settings files for any number of settings roots, kept in one directory
#[derive(Debug, Clone)]
pub struct SettingsStore {
    base_dir: PathBuf,
    merge: MergeOptions,
}

impl SettingsStore {
    /// Create a store rooted at `base_dir` with default merge options.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            merge: MergeOptions::default(),
        }
    }

    /// Use `options` when merging override files.
    pub fn with_merge_options(mut self, options: MergeOptions) -> Self {
        self.merge = options;
        self
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn merge_options(&self) -> MergeOptions {
        self.merge
    }

    /// `<base_dir>/<TypeName>.user.json`
    pub fn user_file<T: SchemaModel>(&self) -> PathBuf {
        self.base_dir.join(format!("{}.user.json", T::NAME))
    }

    /// `<base_dir>/<TypeName>.schema.json`
    pub fn schema_file<T: SchemaModel>(&self) -> PathBuf {
        self.base_dir.join(schema::default_schema_file_name::<T>())
    }

    /// Check if an override file exists for `T`
    pub fn has_user_file<T: SchemaModel>(&self) -> bool {
        self.user_file::<T>().is_file()
    }

    /// Defaults merged with `<TypeName>.user.json`, if present.
    pub fn load<T: SchemaModel>(&self) -> Result<T> {
        load::load_with_options(Some(&self.user_file::<T>()), self.merge)
    }

    /// Write updatable fields back into `<TypeName>.user.json`, which must exist.
    pub fn update<T: SchemaModel>(&self, settings: &T) -> Result<UpdateReport> {
        update::update(settings, &self.user_file::<T>())
    }

    /// Write `<TypeName>.schema.json` and return the schema.
    pub fn export_schema<T: SchemaModel>(&self) -> Result<Value> {
        schema::export_schema::<T>(None, Some(&self.base_dir))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::fixtures::Rig;
    use crate::merge::ArrayMerge;
    use settings_test_utils::TestDir;
    use serde_json::json;

    #[test]
    fn file_names_follow_type_name() {
        let store = SettingsStore::new("/opt/rig");

        assert_eq!(store.user_file::<Rig>(), PathBuf::from("/opt/rig/Rig.user.json"));
        assert_eq!(store.schema_file::<Rig>(), PathBuf::from("/opt/rig/Rig.schema.json"));
    }

    #[test]
    fn load_without_user_file_gives_defaults() {
        let dir = TestDir::new();
        let store = SettingsStore::new(dir.root());

        assert!(!store.has_user_file::<Rig>());
        assert_eq!(store.load::<Rig>().unwrap(), Rig::default());
    }

    #[test]
    fn load_uses_configured_merge_options() {
        let dir = TestDir::new();
        dir.write_json("Rig.user.json", &json!({"tags": ["night"]}));
        let store = SettingsStore::new(dir.root())
            .with_merge_options(MergeOptions::with_arrays(ArrayMerge::Append));

        let rig = store.load::<Rig>().unwrap();
        assert_eq!(rig.tags, vec!["day", "night"]);
    }

    #[test]
    fn update_requires_existing_user_file() {
        let dir = TestDir::new();
        let store = SettingsStore::new(dir.root());

        let err = store.update(&Rig::default()).unwrap_err();
        assert!(matches!(err, Error::Io { .. }), "got {err:?}");
        dir.assert_file_not_exists("Rig.user.json");
    }

    #[test]
    fn export_schema_lands_next_to_user_file() {
        let dir = TestDir::new();
        let store = SettingsStore::new(dir.root());

        store.export_schema::<Rig>().unwrap();
        dir.assert_file_exists("Rig.schema.json");
    }
}
