//! [`TestDir`] fixture for settings file scenarios.

use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory with helpers for writing and inspecting JSON
/// settings files.
///
/// # Example
///
/// ```rust,no_run
/// use settings_test_utils::TestDir;
///
/// let dir = TestDir::new();
/// let path = dir.write_json("AppSettings.user.json", &serde_json::json!({}));
/// dir.assert_file_exists("AppSettings.user.json");
/// ```
pub struct TestDir {
    temp_dir: TempDir,
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}

impl TestDir {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `name` inside the directory. The file need not exist.
    pub fn path(&self, name: &str) -> PathBuf {
        self.root().join(name)
    }

    /// Write `value` as pretty JSON and return the file path.
    ///
    /// # Panics
    /// Panics if the file cannot be written.
    pub fn write_json(&self, name: &str, value: &Value) -> PathBuf {
        let content = serde_json::to_string_pretty(value).unwrap();
        self.write_raw(name, &content)
    }

    /// Write arbitrary text (e.g. deliberately malformed JSON).
    ///
    /// # Panics
    /// Panics if the file cannot be written.
    pub fn write_raw(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content)
            .unwrap_or_else(|e| panic!("write_raw: failed to write {}: {e}", path.display()));
        path
    }

    /// Read and parse a JSON file in the directory.
    ///
    /// # Panics
    /// Panics if the file is missing or not valid JSON.
    pub fn read_json(&self, name: &str) -> Value {
        serde_json::from_str(&self.read_raw(name)).unwrap_or_else(|e| {
            panic!("read_json: {} is not valid JSON: {e}", self.path(name).display())
        })
    }

    /// Read a file's raw text.
    ///
    /// # Panics
    /// Panics if the file cannot be read.
    pub fn read_raw(&self, name: &str) -> String {
        let path = self.path(name);
        fs::read_to_string(&path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", path.display()))
    }

    /// Assert that `name` exists in the directory.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, name: &str) {
        let full_path = self.path(name);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `name` does **not** exist in the directory.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path exists.
    pub fn assert_file_not_exists(&self, name: &str) {
        let full_path = self.path(name);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }
}
