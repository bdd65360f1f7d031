//! GroovyDoc comment parser: regex pipeline over `/** ... */ def name(...)`.
//!
//! Anything that does not fit the expected shape is skipped rather than
//! reported, so one bad comment never hides the rest of the file.

use crate::model::*;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

// -- Regex patterns -----------------------------------------------------------

// `/**`, body up to the first `*/`, blank space, then `def name(...)` on one line
static RE_DOC_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/\*\*(?:[^*]|\*+[^*/])*\*+/\s*def\s+\w+\s*\(.*\)").unwrap()
});

// Comment body line: leading stars, an optional `/` closing the comment, content
static RE_COMMENT_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\*+(/)?\s*(.*)$").unwrap());

static RE_PARAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)@param[ \t]+(\w+)(?:[ \t]+(.*))?$").unwrap());

static RE_PARAM_TYPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\(([^)]*)\)[ \t]*(.*)$").unwrap());

static RE_RETURN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)@return[ \t]+(.*)$").unwrap());

static RE_DEF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"def\s+(\w+)\s*\((.*)\)").unwrap());

// -- Public API ---------------------------------------------------------------

/// Parse Groovy source text into its documented functions.
///
/// Functions come back in first-seen order. A later block with the same name
/// replaces the earlier record but keeps its position.
pub fn parse(input: &str) -> Vec<FunctionRecord> {
    let mut functions: Vec<FunctionRecord> = Vec::new();

    for block in RE_DOC_BLOCK.find_iter(input) {
        match parse_block(block.as_str()) {
            Some(func) => {
                debug!(
                    function = %func.name,
                    parameters = func.parameters.len(),
                    "extracted function"
                );
                upsert(&mut functions, func);
            }
            None => debug!("skipping doc block without a def declaration"),
        }
    }

    functions
}

/// Parse one doc comment plus its declaration line.
///
/// Returns `None` when no `def name(...)` follows the comment.
pub fn parse_block(block: &str) -> Option<FunctionRecord> {
    let text = strip_comment(block);

    let parameters = parse_parameters(&text);
    let returns = parse_return(&text);

    let description = RE_PARAM.replace_all(&text, "");
    let description = RE_RETURN.replace_all(description.trim(), "");
    let description = description.trim().to_string();
    let header = description.lines().next().unwrap_or_default().to_string();

    // The declaration follows the comment; a `def` quoted inside the
    // comment body must not be taken for it.
    let declaration = block.find("*/").map_or(block, |end| &block[end + 2..]);
    let caps = RE_DEF.captures(declaration)?;
    let name = caps[1].to_string();
    let code_definition = format!("def {}( {} )", name, &caps[2]);

    Some(FunctionRecord {
        name,
        header,
        description,
        parameters,
        returns,
        code_definition,
    })
}

// -- Helper functions ---------------------------------------------------------

/// Strip comment delimiters and leading stars, one output line per body line.
fn strip_comment(block: &str) -> String {
    let mut out = String::new();
    for line in block.lines() {
        let Some(caps) = RE_COMMENT_LINE.captures(line) else {
            continue;
        };
        // bare `*/`
        if caps.get(1).is_some() {
            continue;
        }
        let content = caps[2].trim_end();
        let content = content.strip_suffix("*/").unwrap_or(content).trim_end();
        out.push_str(content);
        out.push('\n');
    }
    out
}

fn parse_parameters(text: &str) -> Vec<ParameterRecord> {
    let mut parameters = Vec::new();
    for line in text.lines() {
        let Some(caps) = RE_PARAM.captures(line) else {
            if line.contains("@param") {
                debug!(line, "skipping malformed @param line");
            }
            continue;
        };
        let name = &caps[1];
        let rest = caps.get(2).map_or("", |m| m.as_str().trim());

        let parameter = match RE_PARAM_TYPE.captures(rest) {
            Some(typed) => ParameterRecord::new(name, typed[1].trim(), typed[2].trim()),
            None => ParameterRecord::new(name, "", rest),
        };
        upsert(&mut parameters, parameter);
    }
    parameters
}

fn parse_return(text: &str) -> String {
    RE_RETURN
        .captures(text)
        .map(|caps| caps[1].trim().to_string())
        .filter(|r| !r.is_empty())
        .unwrap_or_else(|| NO_RETURN.to_string())
}
