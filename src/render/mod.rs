//! Renderer module: trait-based format dispatch.

pub mod confluence;
pub mod json;
pub mod markdown;

use crate::error::{Error, Result};
use crate::model::FileRecord;
use crate::template::Template;
use tracing::warn;

/// Trait for rendering a parsed file into a specific output format.
pub trait Renderer {
    fn render(&self, file: &FileRecord) -> String;
    fn file_extension(&self) -> &str;
}

/// Create a renderer for the given format name.
///
/// `template` and `target` only affect the Confluence format. The built-in
/// template is used when `template` is `None`; with a `target` page body the
/// rendered functions land at its `${groovy.target}`.
pub fn create_renderer(
    format: &str,
    template: Option<Template>,
    target: Option<String>,
) -> Result<Box<dyn Renderer>> {
    let renderer: Box<dyn Renderer> = match format {
        "confluence" | "xhtml" => {
            let renderer = confluence::ConfluenceRenderer::new(template.unwrap_or_default());
            return Ok(match target {
                Some(body) => Box::new(renderer.with_target(body)),
                None => Box::new(renderer),
            });
        }
        "markdown" | "md" => Box::new(markdown::MarkdownRenderer),
        "json" => Box::new(json::JsonRenderer),
        _ => {
            return Err(Error::UnknownFormat {
                format: format.to_string(),
            })
        }
    };
    if template.is_some() || target.is_some() {
        warn!(format = %format, "template and target only apply to the confluence format");
    }
    Ok(renderer)
}
