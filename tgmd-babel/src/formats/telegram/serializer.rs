//! Telegram serialization (document tree → MarkdownV2 export)
//!
//! Pipeline: Document → post-order walk → per-node rules → trimmed string.
//! Children are always fully rendered before their parent's rule runs.

use super::fragment::Fragment;
use super::rules::{Rendered, TelegramOptions, Translator};
use crate::common::code::{CodeFormatter, DefaultCodeFormatter};
use crate::common::links::{LinkResolver, NoResolver};
use crate::common::source::SourceAccessor;
use crate::ir::nodes::{Document, Node};

static NO_RESOLVER: NoResolver = NoResolver;
static DEFAULT_FORMATTER: DefaultCodeFormatter = DefaultCodeFormatter {
    preserve_indentation: false,
};

/// Serialize a document with default options and collaborators.
pub fn serialize_to_telegram(doc: &Document) -> String {
    let options = TelegramOptions::default();
    Exporter::new(&options).export(doc)
}

/// Walks a document tree and applies the translation rules bottom-up.
pub struct Exporter<'a> {
    options: &'a TelegramOptions,
    resolver: &'a dyn LinkResolver,
    formatter: &'a dyn CodeFormatter,
}

impl<'a> Exporter<'a> {
    /// Exporter with no link resolution and the default code formatter.
    pub fn new(options: &'a TelegramOptions) -> Self {
        Exporter {
            options,
            resolver: &NO_RESOLVER,
            formatter: &DEFAULT_FORMATTER,
        }
    }

    pub fn with_resolver(mut self, resolver: &'a dyn LinkResolver) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn with_formatter(mut self, formatter: &'a dyn CodeFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn export(&self, doc: &Document) -> String {
        tracing::debug!(
            top_level_nodes = doc.children.len(),
            escape = self.options.escape.enabled,
            "Exporting document to MarkdownV2"
        );
        let source = doc.source.as_ref().map(|s| s as &dyn SourceAccessor);
        let translator = Translator::new(self.options, self.resolver, self.formatter, source);
        let body = render_all(&translator, &doc.children);
        translator.finish(body)
    }
}

fn render_all(translator: &Translator<'_>, nodes: &[Node]) -> Fragment {
    nodes
        .iter()
        .filter_map(|node| render(translator, node))
        .collect()
}

fn render(translator: &Translator<'_>, node: &Node) -> Option<Fragment> {
    let content = render_all(translator, node.children());
    let title = match node {
        Node::Heading(heading) => render_all(translator, &heading.title),
        _ => Fragment::new(),
    };
    let fragment = translator.translate(node, Rendered { content, title });
    if fragment.is_none() {
        tracing::trace!(kind = node.kind(), "Node produced no output");
    }
    fragment
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::links::StandardResolver;
    use crate::ir::nodes::{Heading, Link};

    fn paragraph(children: Vec<Node>) -> Node {
        Node::Paragraph { children }
    }

    #[test]
    fn test_text_escaped_once_through_nesting() {
        let doc = Document::new(vec![paragraph(vec![
            Node::text("1.5 "),
            Node::Bold {
                children: vec![Node::Italic {
                    children: vec![Node::text("x-y")],
                }],
            },
        ])]);

        assert_eq!(serialize_to_telegram(&doc), "1\\.5 **__x\\-y__**");
    }

    #[test]
    fn test_empty_paragraphs_dropped() {
        let doc = Document::new(vec![
            paragraph(vec![Node::text("one")]),
            paragraph(vec![Node::text("   ")]),
            paragraph(vec![Node::text("two")]),
        ]);

        assert_eq!(serialize_to_telegram(&doc), "one\n\ntwo");
    }

    #[test]
    fn test_heading_title_rendered_separately() {
        let doc = Document::new(vec![Node::Heading(Heading {
            level: 2,
            title: vec![Node::text("A "), Node::Code {
                value: Some("b".to_string()),
            }],
            children: vec![Node::Section {
                children: vec![paragraph(vec![Node::text("Body.")])],
            }],
        })]);

        assert_eq!(serialize_to_telegram(&doc), "## **A `b`**\n\nBody\\.");
    }

    #[test]
    fn test_bare_link_escaped_by_enclosing_paragraph() {
        let doc = Document::new(vec![paragraph(vec![
            Node::text("See "),
            Node::Link(Link::new("https", "//example.com")),
        ])]);

        assert_eq!(serialize_to_telegram(&doc), "See https://example\\.com");
    }

    #[test]
    fn test_custom_resolver() {
        let options = TelegramOptions::default();
        let resolver = StandardResolver::new().with_target("custom-id:faq", "https://t.me/c/1/9");
        let doc = Document::new(vec![paragraph(vec![Node::Link(
            Link::new("custom-id", "faq").with_description(vec![Node::text("FAQ")]),
        )])]);

        let out = Exporter::new(&options).with_resolver(&resolver).export(&doc);
        assert_eq!(out, "[FAQ](https://t.me/c/1/9)");
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(serialize_to_telegram(&Document::default()), "");
    }
}
