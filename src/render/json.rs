//! JSON renderer: structured output for tooling integration.
//!
//! Serializes the file record directly. Function and parameter order is kept.

use crate::model::FileRecord;
use crate::render::Renderer;

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, file: &FileRecord) -> String {
        let mut out = serde_json::to_string_pretty(file)
            .expect("file record holds only strings and vectors; the path is written lossily");
        out.push('\n');
        out
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}
