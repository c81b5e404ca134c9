//! Table passthrough tests

use super::text;
use tgmd_babel::formats::telegram::{serialize_to_telegram, TelegramFormat, TelegramOptions};
use tgmd_babel::format::Format;
use tgmd_babel::ir::nodes::{Document, Node, Table};

const SOURCE: &str = "Intro\n| a | b |\n|---|---|\n";

fn table(begin: Option<usize>, end: Option<usize>, raw: Option<&str>) -> Node {
    Node::Table(Table {
        begin,
        end,
        raw: raw.map(str::to_string),
        children: vec![Node::TableRow {
            children: vec![Node::TableCell {
                children: vec![text("cell contents are ignored")],
            }],
        }],
    })
}

#[test]
fn test_table_from_source_range() {
    let doc = Document::new(vec![table(Some(6), Some(SOURCE.len()), None)]).with_source(SOURCE);
    assert_eq!(
        serialize_to_telegram(&doc),
        "```\n| a | b |\n|---|---|\n```"
    );
}

#[test]
fn test_table_not_escaped_even_when_escaping() {
    let source = "| v1.2 | (beta) |\n";
    let doc = Document::new(vec![table(Some(0), Some(source.len()), None)]).with_source(source);

    let escaped = TelegramFormat::default().serialize(&doc).unwrap();
    let plain = TelegramFormat::new(TelegramOptions::default().with_escape(false))
        .serialize(&doc)
        .unwrap();
    assert_eq!(escaped, "```\n| v1.2 | (beta) |\n```");
    assert_eq!(escaped, plain);
}

#[test]
fn test_out_of_bounds_range_falls_back_to_raw() {
    let doc = Document::new(vec![table(Some(6), Some(500), Some("| raw |\n"))])
        .with_source(SOURCE);
    assert_eq!(serialize_to_telegram(&doc), "```\n| raw |\n```");
}

#[test]
fn test_missing_range_and_raw_produces_nothing() {
    let doc = Document::new(vec![
        Node::Paragraph {
            children: vec![text("before")],
        },
        table(None, Some(4), None),
        Node::Paragraph {
            children: vec![text("after")],
        },
    ])
    .with_source(SOURCE);

    assert_eq!(serialize_to_telegram(&doc), "before\n\nafter");
}

#[test]
fn test_range_without_source_produces_nothing() {
    let doc = Document::new(vec![table(Some(0), Some(5), None)]);
    assert_eq!(serialize_to_telegram(&doc), "");
}

#[test]
fn test_range_splitting_a_character_is_rejected() {
    let source = "é| x |\n";
    // byte 1 is inside the two-byte 'é'
    let doc = Document::new(vec![table(Some(1), Some(source.len()), None)]).with_source(source);
    assert_eq!(serialize_to_telegram(&doc), "");
}

#[test]
fn test_blank_table_text_produces_nothing() {
    let doc = Document::new(vec![table(None, None, Some(" \n \n"))]);
    assert_eq!(serialize_to_telegram(&doc), "");
}
