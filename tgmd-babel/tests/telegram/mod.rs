//! Telegram MarkdownV2 export tests
//!
//! Whole documents go through the public entry points (`TelegramFormat`,
//! `Exporter`, `serialize_to_telegram`); per-rule behavior is covered by the
//! unit tests next to the rules.

mod export;
mod links;
mod tables;

use tgmd_babel::ir::nodes::Node;

pub fn text(value: &str) -> Node {
    Node::text(value)
}

pub fn paragraph(children: Vec<Node>) -> Node {
    Node::Paragraph { children }
}
