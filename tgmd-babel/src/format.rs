//! The `Format` trait
//!
//! A format names one textual representation of a document tree and knows how
//! to read it, write it, or both. The registry dispatches on the format name;
//! everything else about a format is its own business.

use crate::error::FormatError;
use crate::ir::nodes::Document;
use std::collections::HashMap;

/// A named document representation.
///
/// Only `name` is mandatory. A format advertises what it can do through
/// `supports_parsing`/`supports_serialization` and overrides the matching
/// method; the defaults refuse with [`FormatError::NotSupported`].
///
/// ```ignore
/// struct Outline;
///
/// impl Format for Outline {
///     fn name(&self) -> &str {
///         "outline"
///     }
///
///     fn supports_serialization(&self) -> bool {
///         true
///     }
///
///     fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
///         Ok(format!("{} top-level nodes", doc.children.len()))
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// Registry key, e.g. "telegram" or "tree-json".
    fn name(&self) -> &str;

    fn description(&self) -> &str {
        ""
    }

    /// Extensions without the leading dot. Used to guess `--from`.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    fn supports_parsing(&self) -> bool {
        false
    }

    fn supports_serialization(&self) -> bool {
        false
    }

    fn parse(&self, _source: &str) -> Result<Document, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support parsing",
            self.name()
        )))
    }

    fn serialize(&self, _doc: &Document) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support serialization",
            self.name()
        )))
    }

    /// Serialize with per-call options (the CLI's `--extra-*` values).
    ///
    /// Formats without options keep this default, which accepts an empty map
    /// only.
    fn serialize_with_options(
        &self,
        doc: &Document,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        if options.is_empty() {
            self.serialize(doc)
        } else {
            Err(FormatError::NotSupported(format!(
                "Format '{}' does not support extra parameters",
                self.name()
            )))
        }
    }
}
