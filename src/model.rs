//! Data model for extracted GroovyDoc: format-agnostic records plus the
//! Confluence fragments each record knows how to render.

use crate::render::confluence::xml_escape;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Return text used when a function documents no `@return`.
pub const NO_RETURN: &str = "Nothing.";

/// Records stored in an ordered mapping keyed by name.
pub(crate) trait Keyed {
    fn key(&self) -> &str;
}

/// Insert `item` into an insertion-ordered list keyed by name.
///
/// A new key is appended. A key already present keeps its position and only
/// the value is replaced.
pub(crate) fn upsert<T: Keyed>(items: &mut Vec<T>, item: T) {
    match items.iter().position(|existing| existing.key() == item.key()) {
        Some(index) => items[index] = item,
        None => items.push(item),
    }
}

/// All documented functions of one parsed source file.
#[derive(Debug, Serialize)]
pub struct FileRecord {
    #[serde(serialize_with = "serialize_path")]
    pub(crate) path: PathBuf,
    #[serde(skip)]
    pub(crate) source: String,
    pub(crate) functions: Vec<FunctionRecord>,
}

impl FileRecord {
    /// Normalized path of the parsed file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Full text of the file as it was read.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Functions in first-seen order.
    pub fn functions(&self) -> &[FunctionRecord] {
        &self.functions
    }

    pub fn function(&self, name: &str) -> Option<&FunctionRecord> {
        self.functions.iter().find(|f| f.name == name)
    }

    /// File name without extension, used to name output files.
    pub fn stem(&self) -> String {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default()
    }
}

fn serialize_path<S: serde::Serializer>(path: &Path, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&path.to_string_lossy())
}

/// A single documented `def`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionRecord {
    pub name: String,
    /// First line of the description.
    pub header: String,
    pub description: String,
    /// `@param` entries in order of first appearance.
    pub parameters: Vec<ParameterRecord>,
    pub returns: String,
    /// e.g. `def deploy( String env, Map opts = [:] )`
    pub code_definition: String,
}

impl Keyed for FunctionRecord {
    fn key(&self) -> &str {
        &self.name
    }
}

impl FunctionRecord {
    pub fn parameter(&self, name: &str) -> Option<&ParameterRecord> {
        self.parameters.iter().find(|p| p.name == name)
    }

    /// Render the description as a monospace paragraph, one `<br/>` per line.
    ///
    /// Blank lines are kept so the layout of the comment survives.
    pub fn description_markup(&self) -> String {
        let mut out = String::from("<p><code>\n");
        for line in self.description.split('\n') {
            out.push_str(&xml_escape(line));
            out.push_str("<br/>");
        }
        out.push_str("</code></p>\n");
        out
    }
}

/// Parsed `@param` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterRecord {
    pub name: String,
    /// Token from `(Type)`, empty when the comment gave none.
    #[serde(rename = "type")]
    pub ty: String,
    pub description: String,
}

impl Keyed for ParameterRecord {
    fn key(&self) -> &str {
        &self.name
    }
}

impl ParameterRecord {
    pub fn new(name: impl Into<String>, ty: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            description: description.into(),
        }
    }

    /// Blue bold name, monospace type, then the italic description.
    pub fn markup(&self) -> String {
        format!(
            "<span style=\"color: rgb(0,0,255);\"><strong>{}</strong></span> <code>{}</code> - <em>{}</em>\n",
            xml_escape(&self.name),
            xml_escape(&self.ty),
            xml_escape(&self.description)
        )
    }
}
