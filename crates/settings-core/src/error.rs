//! Error types for settings-core

use std::path::PathBuf;

/// Result type for settings-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading, updating or exporting settings
///
/// A protected field met during write-back is not an error; it is logged and
/// listed in [`UpdateReport::skipped`](crate::UpdateReport::skipped).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File missing, unreadable or unwritable
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed JSON in an override or update file
    #[error("Failed to parse JSON at {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// Data violates a field's declared type or constraints
    #[error("Invalid value for `{field}`: {message}")]
    Validation { field: String, message: String },

    /// Another writer holds the file
    #[error("Lock acquisition failed for {path}")]
    LockFailed { path: PathBuf },

    /// A settings value could not be turned into a JSON tree
    #[error(transparent)]
    Serialize(#[from] serde_json::Error),
}

impl Error {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<settings_fs::Error> for Error {
    fn from(error: settings_fs::Error) -> Self {
        match error {
            settings_fs::Error::Io { path, source } => Self::Io { path, source },
            settings_fs::Error::Json { path, source } => Self::Parse {
                path,
                message: source.to_string(),
            },
            settings_fs::Error::LockFailed { path } => Self::LockFailed { path },
        }
    }
}
