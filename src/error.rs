//! Error types for the extraction library.
//!
//! Only conditions that stop a whole operation are errors. Malformed pieces of
//! a doc block are absorbed by the parser and show up as missing data.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by [`crate::parse`] and the rendering helpers.
#[derive(Error, Debug)]
pub enum Error {
    /// The path handed to the file engine does not exist.
    #[error("source file not found: {}", .path.display())]
    PathNotFound { path: PathBuf },

    /// The path exists but could not be read as text.
    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A template is missing one of the function block markers.
    #[error("template is missing the {marker} marker")]
    MissingMarker { marker: &'static str },

    /// No renderer exists for the requested format name.
    #[error("unknown format: {format}. Use confluence, markdown, or json")]
    UnknownFormat { format: String },
}

pub type Result<T> = std::result::Result<T, Error>;
