//! Document publishing pipeline.
//!
//! Provides a high-level API for exporting document trees to output formats.
//! This module bridges the gap between the format registry and file I/O,
//! handling both in-memory and file-based output.
//!
//! Use this when you want a single function call that handles format
//! selection, serialization, and optional file writing. Callers holding a
//! registry with configured formats go through [`publish_with`].
//!
//! For more control over the conversion process, use [`FormatRegistry`] directly.

use crate::error::FormatError;
use crate::ir::nodes::Document;
use crate::registry::FormatRegistry;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Specifies how to publish a document.
///
/// ```ignore
/// let spec = PublishSpec::new(&document, "telegram")
///     .with_output_path("message.md")
///     .with_option("escape", "false");
/// ```
///
/// Without an output path the content is returned in memory.
#[derive(Debug)]
pub struct PublishSpec<'a> {
    /// The document tree to export.
    pub document: &'a Document,
    /// Target format name (e.g., "telegram", "tree-json").
    pub format: &'a str,
    /// Optional file path for writing output.
    pub output: Option<PathBuf>,
    /// Format-specific options (e.g., `escape`).
    pub options: HashMap<String, String>,
}

impl<'a> PublishSpec<'a> {
    pub fn new(document: &'a Document, format: &'a str) -> Self {
        Self {
            document,
            format,
            output: None,
            options: HashMap::new(),
        }
    }

    /// Sets the output file path. If provided, content is written to disk.
    pub fn with_output_path(mut self, path: impl AsRef<Path>) -> Self {
        self.output = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }
}

/// The output from a successful publish operation.
#[derive(Debug, Clone, PartialEq)]
pub enum PublishArtifact {
    /// Content held in memory (for text formats without an output path).
    InMemory(String),
    /// Path to the written file (when output path was specified).
    File(PathBuf),
}

/// Result of a publish operation.
#[derive(Debug, Clone, PartialEq)]
pub struct PublishResult {
    pub artifact: PublishArtifact,
}

/// Publishes a document using the default format registry.
///
/// # Errors
///
/// Returns [`FormatError`] if:
/// - The format is not registered or cannot serialize
/// - An option is not understood by the format
/// - File I/O fails
pub fn publish(spec: PublishSpec<'_>) -> Result<PublishResult, FormatError> {
    publish_with(&FormatRegistry::with_defaults(), spec)
}

/// Publishes a document through the given registry.
pub fn publish_with(
    registry: &FormatRegistry,
    spec: PublishSpec<'_>,
) -> Result<PublishResult, FormatError> {
    let text = registry.serialize_with_options(spec.document, spec.format, &spec.options)?;
    let artifact = match spec.output {
        Some(path) => PublishArtifact::File(write_to_path(path, text)?),
        None => PublishArtifact::InMemory(text),
    };
    Ok(PublishResult { artifact })
}

fn write_to_path(path: PathBuf, text: String) -> Result<PathBuf, FormatError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, &text)?;
    tracing::info!(path = %path.display(), bytes = text.len(), "Wrote output");
    Ok(path)
}
