//! Rendered output of a node, before it is composed into its parent.
//!
//! A fragment is a sequence of segments. Plain-text segments hold text that
//! has not been escaped yet; markup segments are final. Wrapping rules call
//! [`Fragment::escaped`], which escapes the plain text once and leaves the
//! markup produced by nested rules intact.

use super::escape::{escape, EscapeConfig};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    Markup(String),
}

impl Segment {
    fn as_str(&self) -> &str {
        match self {
            Segment::Text(s) | Segment::Markup(s) => s,
        }
    }

    fn as_mut_string(&mut self) -> &mut String {
        match self {
            Segment::Text(s) | Segment::Markup(s) => s,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment {
    segments: Vec<Segment>,
}

impl Fragment {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fragment holding unescaped plain text.
    pub fn text(text: impl Into<String>) -> Self {
        let mut fragment = Self::new();
        fragment.push_text(text);
        fragment
    }

    /// A fragment holding final markup.
    pub fn markup(markup: impl Into<String>) -> Self {
        let mut fragment = Self::new();
        fragment.push_markup(markup);
        fragment
    }

    pub fn push_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text.is_empty() {
            return;
        }
        match self.segments.last_mut() {
            Some(Segment::Text(last)) => last.push_str(&text),
            _ => self.segments.push(Segment::Text(text)),
        }
    }

    pub fn push_markup(&mut self, markup: impl Into<String>) {
        let markup = markup.into();
        if markup.is_empty() {
            return;
        }
        match self.segments.last_mut() {
            Some(Segment::Markup(last)) => last.push_str(&markup),
            _ => self.segments.push(Segment::Markup(markup)),
        }
    }

    /// Append another fragment, keeping its segment kinds.
    pub fn append(&mut self, other: Fragment) {
        for segment in other.segments {
            match segment {
                Segment::Text(text) => self.push_text(text),
                Segment::Markup(markup) => self.push_markup(markup),
            }
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// True when the fragment has nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        self.segments.iter().all(|s| s.as_str().trim().is_empty())
    }

    /// The fragment's text with no escaping applied.
    pub fn plain_text(&self) -> String {
        self.segments.iter().map(Segment::as_str).collect()
    }

    /// Escape the plain-text segments and join everything into final markup.
    pub fn escaped(&self, config: EscapeConfig) -> String {
        self.segments
            .iter()
            .map(|segment| match segment {
                Segment::Text(text) => escape(Some(text), config),
                Segment::Markup(markup) => markup.clone(),
            })
            .collect()
    }

    /// Strip leading and trailing whitespace across segment boundaries.
    pub fn trim(mut self) -> Fragment {
        while self
            .segments
            .first()
            .is_some_and(|s| s.as_str().trim_start().is_empty())
        {
            self.segments.remove(0);
        }
        while self
            .segments
            .last()
            .is_some_and(|s| s.as_str().trim_end().is_empty())
        {
            self.segments.pop();
        }
        if let Some(first) = self.segments.first_mut() {
            let s = first.as_mut_string();
            *s = s.trim_start().to_string();
        }
        if let Some(last) = self.segments.last_mut() {
            let s = last.as_mut_string();
            s.truncate(s.trim_end().len());
        }
        self
    }
}

impl FromIterator<Fragment> for Fragment {
    fn from_iter<I: IntoIterator<Item = Fragment>>(parts: I) -> Self {
        let mut joined = Fragment::new();
        for part in parts {
            joined.append(part);
        }
        joined
    }
}
