//! MarkdownV2 escaping.
//!
//! Text reaching the output goes through two steps: a handful of HTML named
//! entities are turned back into the characters they stand for, then every
//! reserved MarkdownV2 character is prefixed with a backslash.
//!
//! Escaping is not idempotent. Each span of text must pass through
//! [`escape`] exactly once; the fragment type in [`super::fragment`] keeps
//! track of what has already been escaped.

/// Whether reserved characters are escaped at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EscapeConfig {
    pub enabled: bool,
}

impl EscapeConfig {
    pub const ENABLED: EscapeConfig = EscapeConfig { enabled: true };
    pub const DISABLED: EscapeConfig = EscapeConfig { enabled: false };
}

impl Default for EscapeConfig {
    fn default() -> Self {
        Self::ENABLED
    }
}

/// Characters with syntactic meaning in MarkdownV2.
pub const RESERVED: &[char] = &[
    '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!',
];

const ENTITIES: &[(&str, char)] = &[
    ("&ldquo;", '"'),
    ("&rdquo;", '"'),
    ("&lsquo;", '\''),
    ("&rsquo;", '\''),
    ("&quot;", '"'),
    ("&amp;", '&'),
    ("&lt;", '<'),
    ("&gt;", '>'),
];

/// Returns true for characters that must be backslash-escaped.
pub fn is_reserved(c: char) -> bool {
    RESERVED.contains(&c)
}

/// Normalize entities and, if enabled, escape reserved characters.
///
/// Absent text yields an empty string.
///
/// ```ignore
/// assert_eq!(escape(Some("a.b!c"), EscapeConfig::ENABLED), "a\\.b\\!c");
/// assert_eq!(escape(None, EscapeConfig::ENABLED), "");
/// ```
pub fn escape(text: Option<&str>, config: EscapeConfig) -> String {
    let Some(text) = text else {
        return String::new();
    };
    let normalized = normalize_entities(text);
    if config.enabled {
        escape_reserved(&normalized)
    } else {
        normalized
    }
}

/// Replace the known HTML entities in a single left-to-right pass.
///
/// Replaced characters are never rescanned, so `&amp;lt;` becomes `&lt;`.
pub fn normalize_entities(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find('&') {
        result.push_str(&rest[..pos]);
        rest = &rest[pos..];
        match ENTITIES
            .iter()
            .find(|(entity, _)| rest.starts_with(entity))
        {
            Some((entity, replacement)) => {
                result.push(*replacement);
                rest = &rest[entity.len()..];
            }
            None => {
                result.push('&');
                rest = &rest[1..];
            }
        }
    }
    result.push_str(rest);

    result
}

/// Prefix every reserved character with a backslash.
pub fn escape_reserved(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + text.len() / 8);
    for c in text.chars() {
        if is_reserved(c) {
            result.push('\\');
        }
        result.push(c);
    }
    result
}
