//! groovydoc: generate Confluence documentation from GroovyDoc comments.
//!
//! `groovydoc -o docs/ -t template.xhtml vars/*.groovy`
//!
//! Without `-o` the rendered output of every file goes to stdout.

use anyhow::{bail, Context, Result};
use clap::Parser;
use groovydoc::render;
use groovydoc::Template;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "groovydoc",
    about = "Generate Confluence documentation from GroovyDoc comments"
)]
struct Cli {
    /// Input files, directories or glob patterns
    #[arg(required = true)]
    files: Vec<String>,

    /// Output directory. If omitted, writes to stdout.
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Output format: confluence (default), markdown, json
    #[arg(short = 'f', long, default_value = "confluence")]
    format: String,

    /// Confluence template containing the ${groovy.function_block.open} and
    /// ${groovy.function_block.close} markers
    #[arg(short = 't', long)]
    template: Option<PathBuf>,

    /// Page body whose ${groovy.target} receives the rendered functions
    #[arg(long)]
    target: Option<PathBuf>,

    /// Log level when RUST_LOG is unset
    #[arg(
        long,
        default_value = "warn",
        value_parser = ["off", "error", "warn", "info", "debug", "trace"]
    )]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let template = cli
        .template
        .as_deref()
        .map(load_template)
        .transpose()?;
    let target = cli
        .target
        .as_deref()
        .map(|path| {
            fs::read_to_string(path)
                .with_context(|| format!("failed to read target page: {}", path.display()))
        })
        .transpose()?;

    let renderer = render::create_renderer(&cli.format, template, target)?;

    if let Some(ref dir) = cli.output {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create output directory: {}", dir.display()))?;
    }

    let input_files = expand_globs(&cli.files)?;
    // Output path -> the input that produced it
    let mut written: HashMap<PathBuf, &Path> = HashMap::new();

    for path in &input_files {
        let file = match groovydoc::parse(path) {
            Ok(file) => file,
            Err(e) => {
                warn!("skipping {}: {}", path.display(), e);
                continue;
            }
        };
        // Nothing documented, nothing to publish
        if file.functions().is_empty() {
            debug!(path = %path.display(), "no documented functions");
            continue;
        }

        let output = renderer.render(&file);
        match cli.output {
            Some(ref dir) => {
                let out_path = dir.join(format!("{}.{}", file.stem(), renderer.file_extension()));
                if let Some(previous) = written.insert(out_path.clone(), path) {
                    bail!(
                        "{} and {} both render to {}",
                        previous.display(),
                        path.display(),
                        out_path.display()
                    );
                }
                fs::write(&out_path, &output)
                    .with_context(|| format!("failed to write {}", out_path.display()))?;
            }
            None => print!("{}", output),
        }
    }

    Ok(())
}

fn init_logging(level: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

fn load_template(path: &Path) -> Result<Template> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read template: {}", path.display()))?;
    Template::parse(&text).with_context(|| format!("invalid template: {}", path.display()))
}

/// File extensions recognized as Groovy sources.
const SUPPORTED_EXTENSIONS: &[&str] = &["groovy", "gvy", "gy", "gsh"];

/// Expand glob patterns into a list of real file paths.
/// Also handles bare directory paths by scanning for supported file types.
fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        // Directories are scanned non-recursively
        if path.is_dir() {
            let entries = fs::read_dir(path)
                .with_context(|| format!("failed to read directory: {}", path.display()))?;
            for entry in entries.flatten() {
                let p = entry.path();
                if p.is_file() && has_supported_extension(&p) {
                    files.push(p);
                }
            }
            continue;
        }
        let matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            warn!("no files matched: {}", pattern);
        }
        files.extend(matches);
    }
    // Sort for deterministic output
    files.sort();
    files.dedup();
    Ok(files)
}

fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext))
}
