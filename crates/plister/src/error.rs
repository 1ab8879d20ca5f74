//! Error types for loading and editing property lists.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or editing a plist file.
#[derive(Error, Debug)]
pub enum PlistError {
    /// The file's bytes could not be read (missing file, permissions, I/O fault).
    #[error("could not load data from {}: {source}", .path.display())]
    CouldNotLoadData {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The bytes were read but are not a valid XML or binary property list.
    #[error("malformed property list in {}: {source}", .path.display())]
    MalformedDocument {
        path: PathBuf,
        #[source]
        source: plist::Error,
    },

    /// The document decoded fine but its root is not a dictionary.
    #[error("could not transform {} into a dictionary: root is not a dictionary", .path.display())]
    CouldNotTransformToDictionary { path: PathBuf },

    /// The document holds a value kind with no [`PlistValue`](crate::PlistValue) counterpart.
    #[error("unsupported {kind} value in {}", .path.display())]
    UnsupportedValue { path: PathBuf, kind: &'static str },

    /// `set_value` was called with an empty key.
    #[error("plist key must not be empty")]
    EmptyKey,

    /// The value has no textual form the editing tool's `Set` command accepts.
    #[error("cannot set key '{key}' to a {kind} value")]
    UnsettableValue { key: String, kind: &'static str },

    /// The editing tool could not be launched or exited non-zero.
    /// `status` is `None` when the process never ran or was killed by a signal.
    #[error("external command `{command}` failed (status {}): {diagnostics}", describe_status(.status))]
    ExternalCommandFailed {
        command: String,
        status: Option<i32>,
        diagnostics: String,
    },
}

fn describe_status(status: &Option<i32>) -> String {
    match status {
        Some(code) => code.to_string(),
        None => "none".to_string(),
    }
}

/// Convenience alias used throughout plister.
pub type Result<T> = std::result::Result<T, PlistError>;
