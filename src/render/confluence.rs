//! Confluence storage-format renderer.
//!
//! Storage format is XHTML, so every piece of comment text is escaped before
//! it is spliced into markup.

use crate::model::FileRecord;
use crate::render::Renderer;
use crate::template::Template;

pub struct ConfluenceRenderer {
    template: Template,
    /// Page body whose `${groovy.target}` receives the sections.
    target: Option<String>,
}

impl ConfluenceRenderer {
    pub fn new(template: Template) -> Self {
        Self {
            template,
            target: None,
        }
    }

    pub fn with_target(mut self, body: impl Into<String>) -> Self {
        self.target = Some(body.into());
        self
    }
}

impl Renderer for ConfluenceRenderer {
    fn render(&self, file: &FileRecord) -> String {
        self.template
            .render_page(file.functions(), self.target.as_deref())
    }

    fn file_extension(&self) -> &str {
        "xhtml"
    }
}

pub(crate) fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
