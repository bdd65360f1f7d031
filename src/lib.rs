//! groovydoc: extract GroovyDoc comments from Groovy sources.
//!
//! Recognizes one shape only: a `/** ... */` comment directly followed by a
//! `def name(...)` declaration. Each block becomes a [`FunctionRecord`] with
//! its `@param` and `@return` tags split out. Records render into Confluence
//! storage-format fragments, or whole pages through a [`Template`].
//!
//! ```no_run
//! let file = groovydoc::parse("vars/pipelineUtils.groovy")?;
//! for func in file.functions() {
//!     println!("{}: {}", func.name, func.header);
//! }
//! # Ok::<(), groovydoc::Error>(())
//! ```

pub mod error;
pub mod model;
pub mod parser;
pub mod render;
pub mod template;
mod toc;

pub use error::{Error, Result};
pub use model::{FileRecord, FunctionRecord, ParameterRecord, NO_RETURN};
pub use template::Template;

use std::path::Path;

/// Parse a Groovy source file into a [`FileRecord`].
pub fn parse(path: impl AsRef<Path>) -> Result<FileRecord> {
    parser::parse_file(path.as_ref())
}
