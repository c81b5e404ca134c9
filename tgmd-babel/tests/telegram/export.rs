//! Whole-document export tests

use super::{paragraph, text};
use insta::assert_snapshot;
use tgmd_babel::format::Format;
use tgmd_babel::formats::telegram::{serialize_to_telegram, Exporter, TelegramFormat, TelegramOptions};
use tgmd_babel::formats::tree_json::TreeJsonFormat;
use tgmd_babel::ir::nodes::{CodeBlock, Document, Heading, Node};

const KITCHENSINK: &str = include_str!("fixtures/kitchensink.json");

fn kitchensink() -> Document {
    TreeJsonFormat.parse(KITCHENSINK).expect("fixture to parse")
}

#[test]
fn test_kitchensink() {
    let out = TelegramFormat::default().serialize(&kitchensink()).unwrap();

    assert_snapshot!(out, @r#"
# **Weekly notes \(v2\)**

Status: **done**, __mostly__ & __checked__ \- ~~late~~\.

`a\_b` and verbatim `x\*y`

## **Links**

https://example\.com \| [notes](file:///tmp/notes.txt)
intro

```
let x \= 1;
x \+ 1
```

```
| name | qty |
|------+-----|
| a.b  | 1   |
```

###### **Deep**
"#);
}

#[test]
fn test_kitchensink_without_escaping() {
    let format = TelegramFormat::new(TelegramOptions::default().with_escape(false));
    let out = format.serialize(&kitchensink()).unwrap();

    assert!(out.starts_with("# **Weekly notes (v2)**\n\n"));
    assert!(out.contains("Status: **done**, __mostly__ & __checked__ - ~~late~~."));
    assert!(out.contains("`a_b` and verbatim `x*y`"));
    assert!(out.contains("```\nlet x = 1;\nx + 1\n```"));
    // table text is never escaped, so it is the same in both modes
    assert!(out.contains("| a.b  | 1   |"));
}

#[test]
fn test_output_has_no_surrounding_whitespace() {
    let out = TelegramFormat::default().serialize(&kitchensink()).unwrap();
    assert_eq!(out, out.trim());
}

#[test]
fn test_entities_normalized_in_text() {
    let doc = Document::new(vec![paragraph(vec![text(
        "&ldquo;Fish &amp; chips&rdquo; &lt;3",
    )])]);

    assert_eq!(serialize_to_telegram(&doc), "\"Fish & chips\" <3");
}

#[test]
fn test_nested_emphasis_escaped_once() {
    let doc = Document::new(vec![paragraph(vec![Node::StrikeThrough {
        children: vec![
            text("a.b "),
            Node::Bold {
                children: vec![Node::Underline {
                    children: vec![text("c!d")],
                }],
            },
        ],
    }])]);

    assert_eq!(serialize_to_telegram(&doc), "~~a\\.b **__c\\!d__**~~");
}

#[test]
fn test_sections_are_transparent() {
    let doc = Document::new(vec![Node::Heading(Heading {
        level: 3,
        title: vec![text("Plan")],
        children: vec![Node::Section {
            children: vec![
                paragraph(vec![text("one")]),
                Node::Section {
                    children: vec![paragraph(vec![text("two")])],
                },
            ],
        }],
    })]);

    assert_snapshot!(serialize_to_telegram(&doc), @r"
### **Plan**

one

two
");
}

#[test]
fn test_example_block_numbered_lines() {
    let block = CodeBlock {
        value: Some("a\nb\nc\n".to_string()),
        number_lines: Some(9),
        ..Default::default()
    };
    let doc = Document::new(vec![Node::ExampleBlock(block)]);

    assert_eq!(
        serialize_to_telegram(&doc),
        "```\n 9  a\n10  b\n11  c\n```"
    );
}

#[test]
fn test_top_level_text_escaped_once() {
    let doc = Document::new(vec![text("  1.5 * 2  ")]);
    assert_eq!(serialize_to_telegram(&doc), "1\\.5 \\* 2");
}

#[test]
fn test_text_in_sections_and_heading_bodies_escaped() {
    let doc = Document::new(vec![
        Node::Section {
            children: vec![text("v1.0 (beta)!")],
        },
        Node::Heading(Heading {
            level: 2,
            title: vec![text("Notes")],
            children: vec![
                text("a-b "),
                Node::Bold {
                    children: vec![text("c.d")],
                },
            ],
        }),
    ]);

    assert_eq!(
        serialize_to_telegram(&doc),
        "v1\\.0 \\(beta\\)\\!## **Notes**\n\na\\-b **c\\.d**"
    );
}

#[test]
fn test_huge_line_number_start_does_not_panic() {
    let json = r#"{"children": [
        {"type": "src-block", "value": "a\nb", "number_lines": 18446744073709551615}
    ]}"#;
    let doc = TreeJsonFormat.parse(json).unwrap();
    let max = usize::MAX.to_string();

    assert_eq!(
        serialize_to_telegram(&doc),
        format!("```\n{max}  a\n{max}  b\n```")
    );
}

#[test]
fn test_exporter_reused_across_documents() {
    let options = TelegramOptions::default();
    let exporter = Exporter::new(&options);

    let first = Document::new(vec![paragraph(vec![text("a.")])]);
    let second = Document::new(vec![paragraph(vec![text("b!")])]);

    assert_eq!(exporter.export(&first), "a\\.");
    assert_eq!(exporter.export(&second), "b\\!");
    assert_eq!(exporter.export(&first), "a\\.");
}
