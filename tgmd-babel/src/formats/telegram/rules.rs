//! Per-node translation rules.
//!
//! Every rule receives the node itself plus the already rendered fragments of
//! its children and returns the node's own fragment. Rules never look at
//! siblings or parents and keep no state between calls, so a single
//! [`Translator`] can serve any number of documents.
//!
//! | Node                     | Output                                              |
//! |--------------------------|-----------------------------------------------------|
//! | Text, LineBreak          | plain text, escaped later by the enclosing rule     |
//! | Paragraph                | escaped, trimmed content + blank line; blank → none |
//! | Bold                     | `**content**`                                       |
//! | Italic, Underline        | `__content__` (no separate italic glyph)            |
//! | StrikeThrough            | `~~content~~`                                       |
//! | Code, Verbatim           | `` `value` ``                                       |
//! | SrcBlock, ExampleBlock   | fenced block, no language tag                       |
//! | Table                    | source text, unescaped, in a fenced block           |
//! | TableRow, TableCell      | children unchanged                                  |
//! | Section                  | children unchanged                                  |
//! | Link                     | `[desc](target)` or the bare target                 |
//! | Heading                  | `### **title**` + blank line + children             |

use super::escape::{escape, EscapeConfig};
use super::fragment::Fragment;
use crate::common::code::CodeFormatter;
use crate::common::links::{LinkResolver, DEFAULT_NETWORK_SCHEMES};
use crate::common::source::SourceAccessor;
use crate::ir::nodes::{CodeBlock, Heading, Link, Node, Table};

/// Deepest heading the target dialect can express.
pub const MAX_HEADING_LEVEL: i64 = 6;

/// Options fixed for the duration of one export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelegramOptions {
    pub escape: EscapeConfig,
    /// Link types exported as `type:path` without resolution.
    pub network_schemes: Vec<String>,
}

impl Default for TelegramOptions {
    fn default() -> Self {
        TelegramOptions {
            escape: EscapeConfig::default(),
            network_schemes: DEFAULT_NETWORK_SCHEMES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl TelegramOptions {
    pub fn with_escape(mut self, enabled: bool) -> Self {
        self.escape = EscapeConfig { enabled };
        self
    }

    pub fn is_network_scheme(&self, link_type: &str) -> bool {
        self.network_schemes.iter().any(|s| s == link_type)
    }
}

/// Rendered inputs for a single rule.
#[derive(Debug, Clone, Default)]
pub struct Rendered {
    /// The node's children, in order.
    pub content: Fragment,
    /// The heading title; empty for every other node.
    pub title: Fragment,
}

impl Rendered {
    pub fn content(content: Fragment) -> Self {
        Rendered {
            content,
            title: Fragment::new(),
        }
    }
}

pub struct Translator<'a> {
    options: &'a TelegramOptions,
    resolver: &'a dyn LinkResolver,
    formatter: &'a dyn CodeFormatter,
    source: Option<&'a dyn SourceAccessor>,
}

impl<'a> Translator<'a> {
    pub fn new(
        options: &'a TelegramOptions,
        resolver: &'a dyn LinkResolver,
        formatter: &'a dyn CodeFormatter,
        source: Option<&'a dyn SourceAccessor>,
    ) -> Self {
        Translator {
            options,
            resolver,
            formatter,
            source,
        }
    }

    /// Translate one node. `None` means the node produces no output.
    pub fn translate(&self, node: &Node, rendered: Rendered) -> Option<Fragment> {
        let esc = self.options.escape;
        match node {
            Node::Text { value } => Some(Fragment::text(value.as_str())),
            Node::LineBreak => Some(Fragment::text("\n")),
            Node::Section { .. } | Node::TableRow { .. } | Node::TableCell { .. } => {
                Some(rendered.content)
            }
            Node::Paragraph { .. } => paragraph(rendered.content, esc),
            Node::Bold { .. } => Some(wrap("**", &rendered.content, esc)),
            Node::Italic { .. } | Node::Underline { .. } => {
                Some(wrap("__", &rendered.content, esc))
            }
            Node::StrikeThrough { .. } => Some(wrap("~~", &rendered.content, esc)),
            Node::Code { value } | Node::Verbatim { value } => {
                Some(inline_code(value.as_deref(), esc))
            }
            Node::SrcBlock(block) | Node::ExampleBlock(block) => Some(self.code_block(block)),
            Node::Table(table) => self.table(table),
            Node::Link(link) => Some(self.link(link, rendered.content)),
            Node::Heading(heading) => Some(self.heading(heading, rendered)),
        }
    }

    /// Final rule for the assembled document.
    ///
    /// Text no wrapping rule has claimed (directly under the root, inside a
    /// section or a heading body) is escaped here.
    pub fn finish(&self, document: Fragment) -> String {
        document.trim().escaped(self.options.escape)
    }

    fn code_block(&self, block: &CodeBlock) -> Fragment {
        let code = self.formatter.format(block);
        fenced(&escape(Some(&code), self.options.escape))
    }

    fn table(&self, table: &Table) -> Option<Fragment> {
        let from_source = match (table.range(), self.source) {
            (Some((begin, end)), Some(source)) => source.slice(begin, end),
            _ => None,
        };
        let Some(raw) = from_source.or(table.raw.as_deref()) else {
            tracing::debug!(
                begin = ?table.begin,
                end = ?table.end,
                "Table has no usable source text, skipping"
            );
            return None;
        };
        if raw.trim().is_empty() {
            return None;
        }
        Some(fenced(raw.trim()))
    }

    fn link(&self, link: &Link, description: Fragment) -> Fragment {
        let full_path = self.full_path(link);
        if description.is_blank() || description.plain_text() == full_path {
            return Fragment::text(full_path);
        }
        Fragment::markup(format!(
            "[{}]({full_path})",
            description.trim().escaped(self.options.escape)
        ))
    }

    /// The link target as it appears in the output.
    pub fn full_path(&self, link: &Link) -> String {
        if self.options.is_network_scheme(&link.link_type) {
            return format!("{}:{}", link.link_type, link.path);
        }
        match self.resolver.resolve(link) {
            Some(resolved) if !resolved.is_empty() => resolved,
            _ => {
                tracing::debug!(
                    link_type = %link.link_type,
                    path = %link.path,
                    "Link not resolved, using raw path"
                );
                link.path.clone()
            }
        }
    }

    fn heading(&self, heading: &Heading, rendered: Rendered) -> Fragment {
        let level = heading_level(heading.level);
        let title = rendered.title.trim().escaped(self.options.escape);
        let mut fragment = Fragment::markup(format!("{} **{title}**\n\n", "#".repeat(level)));
        fragment.append(rendered.content);
        fragment
    }
}

/// Number of hash marks for a heading level, clamped into `1..=6`.
pub fn heading_level(level: i64) -> usize {
    let clamped = level.clamp(1, MAX_HEADING_LEVEL);
    if clamped != level {
        tracing::debug!(level, clamped, "Heading level out of range, clamping");
    }
    clamped as usize
}

fn paragraph(content: Fragment, esc: EscapeConfig) -> Option<Fragment> {
    let content = content.trim();
    if content.is_empty() {
        return None;
    }
    Some(Fragment::markup(format!("{}\n\n", content.escaped(esc))))
}

fn wrap(marker: &str, content: &Fragment, esc: EscapeConfig) -> Fragment {
    Fragment::markup(format!("{marker}{}{marker}", content.escaped(esc)))
}

fn inline_code(value: Option<&str>, esc: EscapeConfig) -> Fragment {
    Fragment::markup(format!("`{}`", escape(value, esc)))
}

fn fenced(body: &str) -> Fragment {
    Fragment::markup(format!("```\n{body}\n```\n\n"))
}
