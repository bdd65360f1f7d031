//! Parser module: file loading and dispatch to the GroovyDoc parser.

pub mod groovy;

use crate::error::{Error, Result};
use crate::model::FileRecord;
use std::fs;
use std::path::Path;
use tracing::info;

/// Read a Groovy source file and extract all of its documented functions.
///
/// Fails with [`Error::PathNotFound`] before reading when `path` does not
/// exist. A file without doc blocks yields an empty record.
pub fn parse_file(path: &Path) -> Result<FileRecord> {
    if !path.exists() {
        return Err(Error::PathNotFound {
            path: path.to_path_buf(),
        });
    }

    let path = fs::canonicalize(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let source = fs::read_to_string(&path).map_err(|source| Error::Io {
        path: path.clone(),
        source,
    })?;

    let functions = groovy::parse(&source);
    info!(
        path = %path.display(),
        functions = functions.len(),
        "parsed groovy source"
    );

    Ok(FileRecord {
        path,
        source,
        functions,
    })
}
