//! JSON document tree format
//!
//! The exporter does not parse markup itself. An external parser dumps its
//! tree as JSON, one object per node with a `"type"` tag, and this format
//! reads it back:
//!
//! ```json
//! {
//!   "source": "| a | b |\n",
//!   "children": [
//!     {"type": "heading", "level": 1, "title": [{"type": "text", "value": "Intro"}]},
//!     {"type": "table", "begin": 0, "end": 10}
//!   ]
//! }
//! ```
//!
//! Serialization writes the same shape back out, pretty-printed, which makes
//! the format useful for inspecting what the exporter received.

use crate::error::FormatError;
use crate::format::Format;
use crate::ir::nodes::Document;

/// Format implementation for JSON-encoded document trees
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeJsonFormat;

impl Format for TreeJsonFormat {
    fn name(&self) -> &str {
        "tree-json"
    }

    fn description(&self) -> &str {
        "Document tree as JSON"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Document, FormatError> {
        serde_json::from_str(source).map_err(|e| FormatError::ParseError(e.to_string()))
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        serde_json::to_string_pretty(doc)
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }
}
