//! Error types for token import.
//!
//! Only loading, template rendering and writing can fail. Extraction and
//! palette parsing are total over any JSON shape and never produce an
//! [`Error`].

use std::io;
use std::path::PathBuf;

/// Errors that can occur while importing design tokens.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The token file does not exist.
    #[error("Input file '{}' not found", .path.display())]
    InputNotFound { path: PathBuf },

    /// The token file exists but could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The token file is not a JSON object.
    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A template failed to compile or render.
    #[error("template error: {0}")]
    Template(String),

    /// A generated artifact could not be written.
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Returns `true` when the input file was missing.
    pub fn is_input_not_found(&self) -> bool {
        matches!(self, Error::InputNotFound { .. })
    }
}

impl From<minijinja::Error> for Error {
    fn from(err: minijinja::Error) -> Self {
        Error::Template(err.to_string())
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
