//! Confluence page templates with `${groovy.*}` placeholders.
//!
//! A template holds one repeatable section between the function block
//! markers. The section is filled once per function, in a single pass over
//! its placeholders, and the results are spliced back into the page.

use crate::error::{Error, Result};
use crate::model::FunctionRecord;
use crate::render::confluence::xml_escape;
use regex::{Captures, Regex};
use std::sync::LazyLock;

pub const TITLE: &str = "${groovy.title}";
pub const HEADER: &str = "${groovy.header}";
pub const DESCRIPTION: &str = "${groovy.description}";
pub const PARAMETERS: &str = "${groovy.parameters}";
pub const RETURNS: &str = "${groovy.returns}";
pub const FUNCTION_CODE: &str = "${groovy.function_code}";
pub const BLOCK_OPEN: &str = "${groovy.function_block.open}";
pub const BLOCK_CLOSE: &str = "${groovy.function_block.close}";
pub const TARGET: &str = "${groovy.target}";

// Per-function placeholders, substituted in a single pass
static RE_PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{groovy\.(?:title|header|description|parameters|returns|function_code)\}")
        .unwrap()
});

const DEFAULT_SECTION: &str = r#"
<h2>${groovy.title}</h2>
<p><strong>${groovy.header}</strong></p>
${groovy.description}
<h3>Parameters</h3>
${groovy.parameters}
<h3>Returns</h3>
<p>${groovy.returns}</p>
<h3>Definition</h3>
<pre>${groovy.function_code}</pre>
"#;

/// A page split around its repeatable function section.
#[derive(Debug, Clone)]
pub struct Template {
    before: String,
    section: String,
    after: String,
}

impl Default for Template {
    fn default() -> Self {
        Self {
            before: String::new(),
            section: DEFAULT_SECTION.to_string(),
            after: String::new(),
        }
    }
}

impl Template {
    /// Split `text` at the function block markers.
    ///
    /// The section may span several lines. Both markers are required.
    pub fn parse(text: &str) -> Result<Self> {
        let open = text.find(BLOCK_OPEN).ok_or(Error::MissingMarker {
            marker: BLOCK_OPEN,
        })?;
        let section_start = open + BLOCK_OPEN.len();
        let close = text[section_start..]
            .find(BLOCK_CLOSE)
            .map(|offset| section_start + offset)
            .ok_or(Error::MissingMarker {
                marker: BLOCK_CLOSE,
            })?;

        Ok(Self {
            before: text[..open].to_string(),
            section: text[section_start..close].to_string(),
            after: text[close + BLOCK_CLOSE.len()..].to_string(),
        })
    }

    /// The raw repeatable section, placeholders untouched.
    pub fn section(&self) -> &str {
        &self.section
    }

    /// Fill the section for a single function.
    ///
    /// Substituted text is never rescanned, so a comment quoting a
    /// placeholder keeps it verbatim.
    pub fn render_function(&self, func: &FunctionRecord) -> String {
        RE_PLACEHOLDER
            .replace_all(&self.section, |caps: &Captures| match &caps[0] {
                TITLE => xml_escape(&func.name),
                HEADER => xml_escape(&func.header),
                DESCRIPTION => func.description_markup(),
                PARAMETERS => parameter_list(func),
                RETURNS => xml_escape(&func.returns),
                FUNCTION_CODE => xml_escape(&func.code_definition),
                other => other.to_string(),
            })
            .into_owned()
    }

    /// Filled sections for every function, in order.
    pub fn render_functions(&self, funcs: &[FunctionRecord]) -> String {
        funcs.iter().map(|f| self.render_function(f)).collect()
    }

    /// Build the final page body.
    ///
    /// With a `target` body its `${groovy.target}` placeholder receives the
    /// sections. Otherwise the marked block of the template itself is
    /// replaced.
    pub fn render_page(&self, funcs: &[FunctionRecord], target: Option<&str>) -> String {
        let sections = self.render_functions(funcs);
        match target {
            Some(body) => body.replace(TARGET, &sections),
            None => format!("{}{}{}", self.before, sections, self.after),
        }
    }
}

/// `<ul>` with one `<li>` per parameter.
fn parameter_list(func: &FunctionRecord) -> String {
    let mut out = String::from("<ul>\n");
    for param in &func.parameters {
        out.push_str("<li>\n");
        out.push_str(&param.markup());
        out.push_str("</li>\n");
    }
    out.push_str("</ul>\n");
    out
}
