//! Telegram MarkdownV2 format implementation
//!
//! Export only: a document tree is turned into the Markdown flavour accepted
//! by the Telegram Bot API (`parse_mode=MarkdownV2`).
//!
//! # Element Mapping Table
//!
//! | Tree Element        | MarkdownV2 Output            | Notes                                     |
//! |---------------------|------------------------------|-------------------------------------------|
//! | Heading             | `## **Title**`               | Level clamped into 1..=6                  |
//! | Paragraph           | Escaped text + blank line    | Blank paragraphs are dropped              |
//! | Bold                | `**text**`                   |                                           |
//! | Italic / Underline  | `__text__`                   | The dialect has no distinct italic glyph  |
//! | StrikeThrough       | `~~text~~`                   |                                           |
//! | Code / Verbatim     | `` `value` ``                | Value escaped as opaque text              |
//! | Src / Example block | Fenced block                 | No language tag                           |
//! | Table               | Fenced block of source text  | Tabular layout can't survive otherwise    |
//! | Link                | `[desc](target)`             | Bare target when desc is empty or equal   |
//!
//! # Escaping
//!
//! All plain text is escaped exactly once (see [`escape`]). Link targets and
//! table source are never escaped. Escaping can be switched off entirely with
//! the `escape` option, in which case only entity normalization runs.
//!
//! # Lossy Conversions
//!
//! - Headings deeper than 6 are flattened to level 6
//! - Italic and underline become indistinguishable
//! - Table structure is replaced by its source text
//! - Code block languages are dropped

pub mod escape;
pub mod fragment;
pub mod rules;
pub mod serializer;

use crate::common::code::DefaultCodeFormatter;
use crate::common::links::StandardResolver;
use crate::error::FormatError;
use crate::format::Format;
use crate::ir::nodes::Document;
use std::collections::HashMap;

pub use escape::EscapeConfig;
pub use rules::TelegramOptions;
pub use serializer::{serialize_to_telegram, Exporter};

/// Format implementation for Telegram MarkdownV2
#[derive(Debug, Clone, Default)]
pub struct TelegramFormat {
    options: TelegramOptions,
    resolver: StandardResolver,
    formatter: DefaultCodeFormatter,
}

impl TelegramFormat {
    pub fn new(options: TelegramOptions) -> Self {
        TelegramFormat {
            options,
            ..Default::default()
        }
    }

    pub fn with_resolver(mut self, resolver: StandardResolver) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn with_formatter(mut self, formatter: DefaultCodeFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    fn export(&self, doc: &Document, options: &TelegramOptions) -> String {
        Exporter::new(options)
            .with_resolver(&self.resolver)
            .with_formatter(&self.formatter)
            .export(doc)
    }
}

impl Format for TelegramFormat {
    fn name(&self) -> &str {
        "telegram"
    }

    fn description(&self) -> &str {
        "Telegram MarkdownV2"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(self.export(doc, &self.options))
    }

    fn serialize_with_options(
        &self,
        doc: &Document,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let mut effective = self.options.clone();
        for (key, value) in options {
            match key.as_str() {
                "escape" => effective.escape.enabled = parse_bool(key, value)?,
                other => {
                    return Err(FormatError::NotSupported(format!(
                        "Format 'telegram' does not support parameter '{other}'"
                    )))
                }
            }
        }
        Ok(self.export(doc, &effective))
    }
}

fn parse_bool(key: &str, raw: &str) -> Result<bool, FormatError> {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => Ok(true),
        "false" | "0" | "no" | "n" => Ok(false),
        other => Err(FormatError::SerializationError(format!(
            "Invalid boolean value '{other}' for '{key}'"
        ))),
    }
}
