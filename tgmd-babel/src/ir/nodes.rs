//! Core data structures for the Intermediate Representation (IR).
//!
//! Nodes are built by an external parser (or read back from `tree-json`) and
//! consumed once by the exporter. All node types serialize with an internal
//! `"type"` tag so that a tree can be handed over as plain JSON.

use serde::{Deserialize, Serialize};

/// The root of a document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Original markup source. Tables refer into it by byte offsets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default)]
    pub children: Vec<Node>,
}

impl Document {
    pub fn new(children: Vec<Node>) -> Self {
        Document {
            source: None,
            children,
        }
    }

    /// Attach the markup source the tree was parsed from.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

/// A semantic document node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Node {
    /// Plain text leaf.
    Text { value: String },
    LineBreak,
    /// Transparent grouping container (e.g. the body of a heading).
    Section {
        #[serde(default)]
        children: Vec<Node>,
    },
    Paragraph {
        #[serde(default)]
        children: Vec<Node>,
    },
    Bold {
        #[serde(default)]
        children: Vec<Node>,
    },
    Italic {
        #[serde(default)]
        children: Vec<Node>,
    },
    Underline {
        #[serde(default)]
        children: Vec<Node>,
    },
    StrikeThrough {
        #[serde(default)]
        children: Vec<Node>,
    },
    /// Inline code. Only the literal value is exported.
    Code {
        #[serde(default)]
        value: Option<String>,
    },
    Verbatim {
        #[serde(default)]
        value: Option<String>,
    },
    SrcBlock(CodeBlock),
    ExampleBlock(CodeBlock),
    Table(Table),
    TableRow {
        #[serde(default)]
        children: Vec<Node>,
    },
    TableCell {
        #[serde(default)]
        children: Vec<Node>,
    },
    Link(Link),
    Heading(Heading),
}

impl Node {
    /// Shorthand for a plain text leaf.
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text {
            value: value.into(),
        }
    }

    /// Child nodes rendered before this node's own rule runs.
    ///
    /// Heading titles are not included; see [`Heading::title`].
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Section { children }
            | Node::Paragraph { children }
            | Node::Bold { children }
            | Node::Italic { children }
            | Node::Underline { children }
            | Node::StrikeThrough { children }
            | Node::TableRow { children }
            | Node::TableCell { children } => children.as_slice(),
            Node::Table(table) => table.children.as_slice(),
            Node::Link(link) => link.description.as_slice(),
            Node::Heading(heading) => heading.children.as_slice(),
            Node::Text { .. }
            | Node::LineBreak
            | Node::Code { .. }
            | Node::Verbatim { .. }
            | Node::SrcBlock(_)
            | Node::ExampleBlock(_) => &[],
        }
    }

    /// Short kind name, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Text { .. } => "text",
            Node::LineBreak => "line-break",
            Node::Section { .. } => "section",
            Node::Paragraph { .. } => "paragraph",
            Node::Bold { .. } => "bold",
            Node::Italic { .. } => "italic",
            Node::Underline { .. } => "underline",
            Node::StrikeThrough { .. } => "strike-through",
            Node::Code { .. } => "code",
            Node::Verbatim { .. } => "verbatim",
            Node::SrcBlock(_) => "src-block",
            Node::ExampleBlock(_) => "example-block",
            Node::Table(_) => "table",
            Node::TableRow { .. } => "table-row",
            Node::TableCell { .. } => "table-cell",
            Node::Link(_) => "link",
            Node::Heading(_) => "heading",
        }
    }
}

/// A source or example block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CodeBlock {
    #[serde(default)]
    pub value: Option<String>,
    /// Language tag. Carried for formatters; never emitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// First line number when the block asks for numbered lines.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_lines: Option<usize>,
    #[serde(default)]
    pub preserve_indent: bool,
}

impl CodeBlock {
    pub fn new(value: impl Into<String>) -> Self {
        CodeBlock {
            value: Some(value.into()),
            ..Default::default()
        }
    }
}

/// A table. Its textual layout is taken from the source, not from the rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Byte offset of the first table character in [`Document::source`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub begin: Option<usize>,
    /// Byte offset one past the last table character.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<usize>,
    /// Raw table text, used when no source range is available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
    #[serde(default)]
    pub children: Vec<Node>,
}

impl Table {
    /// The recorded source range, if both ends are present.
    pub fn range(&self) -> Option<(usize, usize)> {
        Some((self.begin?, self.end?))
    }
}

/// A link with its type tag (`https`, `file`, `custom-id`, ...) and raw path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    #[serde(rename = "link-type")]
    pub link_type: String,
    pub path: String,
    #[serde(default)]
    pub description: Vec<Node>,
}

impl Link {
    pub fn new(link_type: impl Into<String>, path: impl Into<String>) -> Self {
        Link {
            link_type: link_type.into(),
            path: path.into(),
            description: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: Vec<Node>) -> Self {
        self.description = description;
        self
    }
}

/// A heading. `level` is kept signed so malformed input can be clamped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    pub level: i64,
    #[serde(default)]
    pub title: Vec<Node>,
    #[serde(default)]
    pub children: Vec<Node>,
}
