//! Link translation tests

use super::{paragraph, text};
use tgmd_babel::common::links::{LinkResolver, StandardResolver};
use tgmd_babel::formats::telegram::{serialize_to_telegram, Exporter, TelegramOptions};
use tgmd_babel::ir::nodes::{Document, Link, Node};

fn doc_with(link: Link) -> Document {
    Document::new(vec![paragraph(vec![Node::Link(link)])])
}

#[test]
fn test_network_link_without_description_is_bare() {
    let doc = doc_with(Link::new("https", "//example.com"));
    assert_eq!(serialize_to_telegram(&doc), "https://example\\.com");
}

#[test]
fn test_network_link_with_description() {
    let doc = doc_with(Link::new("https", "//example.com").with_description(vec![text("Example")]));
    assert_eq!(
        serialize_to_telegram(&doc),
        "[Example](https://example.com)"
    );
}

#[test]
fn test_description_equal_to_target_is_bare() {
    let doc = doc_with(
        Link::new("mailto", "team@example.com")
            .with_description(vec![text("mailto:team@example.com")]),
    );
    assert_eq!(serialize_to_telegram(&doc), "mailto:team@example\\.com");
}

#[test]
fn test_whitespace_description_is_bare() {
    let doc = doc_with(Link::new("ftp", "//files.example.org").with_description(vec![text("  ")]));
    assert_eq!(serialize_to_telegram(&doc), "ftp://files\\.example\\.org");
}

#[test]
fn test_padded_target_description_keeps_brackets() {
    let doc = doc_with(
        Link::new("https", "//example.com").with_description(vec![text(" https://example.com ")]),
    );
    assert_eq!(
        serialize_to_telegram(&doc),
        "[https://example\\.com](https://example.com)"
    );
}

#[test]
fn test_description_markup_kept_and_target_unescaped() {
    let doc = doc_with(
        Link::new("https", "//example.com/a_b?x=1").with_description(vec![
            text("the "),
            Node::Bold {
                children: vec![text("v1.0")],
            },
            text(" notes"),
        ]),
    );
    assert_eq!(
        serialize_to_telegram(&doc),
        "[the **v1\\.0** notes](https://example.com/a_b?x=1)"
    );
}

#[test]
fn test_unresolved_link_falls_back_to_raw_path() {
    let doc = doc_with(Link::new("custom-id", "setup").with_description(vec![text("Setup")]));
    assert_eq!(serialize_to_telegram(&doc), "[Setup](setup)");
}

#[test]
fn test_file_links_become_uris() {
    let options = TelegramOptions::default();
    let resolver = StandardResolver::new();
    let doc = doc_with(Link::new("file", "/srv/docs/guide.org").with_description(vec![text("Guide")]));

    let out = Exporter::new(&options).with_resolver(&resolver).export(&doc);
    assert_eq!(out, "[Guide](file:///srv/docs/guide.org)");
}

#[test]
fn test_relative_file_links_kept() {
    let options = TelegramOptions::default();
    let resolver = StandardResolver::new();
    let doc = doc_with(Link::new("file", "notes/todo.org").with_description(vec![text("todo")]));

    let out = Exporter::new(&options).with_resolver(&resolver).export(&doc);
    assert_eq!(out, "[todo](notes/todo.org)");
}

#[test]
fn test_custom_network_schemes() {
    let options = TelegramOptions {
        network_schemes: vec!["tg".to_string()],
        ..Default::default()
    };
    let tg = doc_with(Link::new("tg", "//resolve?domain=news").with_description(vec![text("News")]));
    let https = doc_with(Link::new("https", "//example.com").with_description(vec![text("Site")]));

    let exporter = Exporter::new(&options);
    assert_eq!(exporter.export(&tg), "[News](tg://resolve?domain=news)");
    // no longer a network scheme: the raw path is used
    assert_eq!(exporter.export(&https), "[Site](//example.com)");
}

struct EmptyResolver;

impl LinkResolver for EmptyResolver {
    fn resolve(&self, _link: &Link) -> Option<String> {
        Some(String::new())
    }
}

#[test]
fn test_empty_resolution_counts_as_unresolved() {
    let options = TelegramOptions::default();
    let doc = doc_with(Link::new("id", "abc-1").with_description(vec![text("Ref")]));

    let out = Exporter::new(&options).with_resolver(&EmptyResolver).export(&doc);
    assert_eq!(out, "[Ref](abc-1)");
}

#[test]
fn test_network_links_skip_the_resolver() {
    let options = TelegramOptions::default();
    let resolver = StandardResolver::new().with_target("//example.com", "https://elsewhere.org");
    let doc = doc_with(Link::new("https", "//example.com").with_description(vec![text("Site")]));

    let out = Exporter::new(&options).with_resolver(&resolver).export(&doc);
    assert_eq!(out, "[Site](https://example.com)");
}
