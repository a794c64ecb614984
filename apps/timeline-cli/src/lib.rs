//! Timeline CLI library
//!
//! Loads a text document from disk, runs the timeline engine over its pages
//! and renders the result as a single JSON object.

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use shared_types::{split_pages, ErrorResponse, TimelineResult};
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};
use timeline_engine::{EngineConfig, TimelineEngine};

/// Inputs for one CLI invocation
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "timeline-cli")]
#[command(version, about = "Extract a dated event timeline from a legal document")]
pub struct RunOptions {
    /// Path to the extracted document text (pages separated by form feeds)
    #[arg(short, long)]
    pub document: PathBuf,

    /// Directory to also write `<stem>_timeline.json` into
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// TOML engine configuration
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Analyze the document named in `options`.
///
/// When an output directory is given and events were found, the JSON result
/// is also written to `<dir>/<stem>_timeline.json`.
pub fn run(options: &RunOptions) -> Result<TimelineResult> {
    let config = match &options.config {
        Some(path) => EngineConfig::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => EngineConfig::default(),
    };

    let text = read_document(&options.document)?;
    let pages = split_pages(&text);
    tracing::info!(
        document = %options.document.display(),
        pages = pages.len(),
        "analyzing document"
    );

    let result = TimelineEngine::new(config).analyze_pages(&pages);

    if let Some(dir) = &options.output {
        if result.events.is_empty() {
            tracing::warn!("no events found, skipping output file");
        } else {
            let path = write_output(dir, &options.document, &result, options.pretty)?;
            tracing::info!(path = %path.display(), "timeline written");
        }
    }

    Ok(result)
}

/// Read document text, replacing invalid UTF-8 sequences
pub fn read_document(path: &Path) -> Result<String> {
    if !path.is_file() {
        anyhow::bail!("Document not found: {}", path.display());
    }
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read document {}", path.display()))?;
    let text = String::from_utf8_lossy(&bytes);
    if let Cow::Owned(_) = text {
        tracing::warn!(document = %path.display(), "document is not valid UTF-8, decoded lossily");
    }
    Ok(text.into_owned())
}

/// Output file path for `document` inside `dir`
pub fn output_path(dir: &Path, document: &Path) -> PathBuf {
    let stem = document
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string());
    dir.join(format!("{}_timeline.json", stem))
}

fn write_output(
    dir: &Path,
    document: &Path,
    result: &TimelineResult,
    pretty: bool,
) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
    let path = output_path(dir, document);
    fs::write(&path, render(result, pretty)?)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}

/// Serialize any response as one JSON object
pub fn render<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

/// JSON printed when the run fails
pub fn error_json(err: &anyhow::Error, pretty: bool) -> String {
    let response = ErrorResponse::new(format!("{:#}", err));
    render(&response, pretty).unwrap_or_else(|_| {
        r#"{"error":"Failed to serialize error","events":[],"success":false}"#.to_string()
    })
}
