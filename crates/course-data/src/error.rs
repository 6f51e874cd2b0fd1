//! Error types for loading course definitions.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised while reading definition files.
///
/// Directory errors stop the whole load; every other variant is reported
/// against a single file so the remaining definitions still load.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefinitionError {
    /// The definitions directory could not be opened.
    #[error("failed to open definitions directory '{path}': {message}")]
    Directory {
        /// Directory that was requested.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// A definition file could not be read.
    #[error("failed to read '{file}': {message}")]
    Read {
        /// File name relative to the definitions directory.
        file: String,
        /// Description of the I/O error.
        message: String,
    },

    /// A definition file does not contain valid JSON.
    #[error("invalid JSON in '{file}': {message}")]
    Parse {
        /// File name relative to the definitions directory.
        file: String,
        /// Description of the parse error.
        message: String,
    },

    /// A definition file contains JSON that is not an object.
    #[error("'{file}' must contain a JSON object")]
    NotAnObject {
        /// File name relative to the definitions directory.
        file: String,
    },
}

impl DefinitionError {
    /// File the error refers to, if it is scoped to a single file.
    #[must_use]
    pub fn file(&self) -> Option<&str> {
        match self {
            Self::Directory { .. } => None,
            Self::Read { file, .. } | Self::Parse { file, .. } | Self::NotAnObject { file } => {
                Some(file.as_str())
            }
        }
    }
}
