//! GitHub-flavored markdown renderer.

use crate::model::*;
use crate::render::Renderer;
use crate::toc;

pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(&self, file: &FileRecord) -> String {
        let mut output = String::new();

        output.push_str(&format!("# {}\n\n", file.stem()));

        if !file.functions().is_empty() {
            output.push_str("## Index\n\n");
            for func in file.functions() {
                output.push_str(&toc::render_toc_item(&func.name));
                output.push('\n');
            }
            output.push('\n');
        }

        for func in file.functions() {
            output.push_str(&render_function(func));
            output.push('\n');
        }

        output
    }

    fn file_extension(&self) -> &str {
        "md"
    }
}

/// Render a single function's documentation block.
fn render_function(func: &FunctionRecord) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("### {}\n", func.name));

    if !func.description.is_empty() {
        lines.push(func.description.clone());
        lines.push(String::new());
    }

    if !func.parameters.is_empty() {
        lines.push("#### Parameters\n".to_string());
        for param in &func.parameters {
            lines.push(format!("* {}", render_param(param)));
        }
        lines.push(String::new());
    }

    lines.push("#### Returns\n".to_string());
    lines.push(func.returns.clone());
    lines.push(String::new());

    lines.push("#### Definition\n".to_string());
    lines.push("```groovy".to_string());
    lines.push(func.code_definition.clone());
    lines.push("```".to_string());
    lines.push(String::new());

    lines.join("\n")
}

/// `name (type): desc`, dropping whichever parts are empty.
///
/// `target String where to deploy` → `**target** (String): where to deploy`
fn render_param(param: &ParameterRecord) -> String {
    let mut out = format!("**{}**", param.name);
    if !param.ty.is_empty() {
        out.push_str(&format!(" (`{}`)", param.ty));
    }
    if !param.description.is_empty() {
        out.push_str(": ");
        out.push_str(&param.description);
    }
    out
}
