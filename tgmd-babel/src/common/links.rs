//! Link target resolution.
//!
//! Network links (`https:`, `mailto:`, ...) carry their target in the link
//! itself. Everything else (local files, internal cross references) has to be
//! turned into a concrete target by a [`LinkResolver`]. When a resolver has
//! no answer the exporter uses the raw path as written in the source.

use crate::ir::nodes::Link;
use std::collections::HashMap;
use std::path::Path;
use url::Url;

/// Link type tag used for local files.
pub const FILE_LINK_TYPE: &str = "file";

/// Link types whose target is `type:path` with no resolution needed.
pub const DEFAULT_NETWORK_SCHEMES: &[&str] = &["http", "https", "ftp", "mailto", "irc"];

/// Resolves non-network links to a concrete target.
///
/// Returning `None` means "unresolved"; the caller then falls back to the raw
/// path.
pub trait LinkResolver: Send + Sync {
    fn resolve(&self, link: &Link) -> Option<String>;
}

/// Resolver that never resolves anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoResolver;

impl LinkResolver for NoResolver {
    fn resolve(&self, _link: &Link) -> Option<String> {
        None
    }
}

/// Resolves file links to URIs and internal references through a target table.
///
/// Target keys are either `type:path` (e.g. `custom-id:intro`) or the bare
/// path; the typed key wins when both are present.
#[derive(Debug, Clone, Default)]
pub struct StandardResolver {
    targets: HashMap<String, String>,
}

impl StandardResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a target for an internal reference.
    pub fn with_target(mut self, key: impl Into<String>, target: impl Into<String>) -> Self {
        self.targets.insert(key.into(), target.into());
        self
    }

    pub fn with_targets<I, K, V>(mut self, targets: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.targets
            .extend(targets.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    fn lookup(&self, link: &Link) -> Option<String> {
        let typed_key = format!("{}:{}", link.link_type, link.path);
        self.targets
            .get(&typed_key)
            .or_else(|| self.targets.get(&link.path))
            .cloned()
    }
}

impl LinkResolver for StandardResolver {
    fn resolve(&self, link: &Link) -> Option<String> {
        if let Some(target) = self.lookup(link) {
            return Some(target);
        }
        if link.link_type == FILE_LINK_TYPE {
            return Some(file_uri(&link.path));
        }
        None
    }
}

/// URI for a local file link.
///
/// Absolute paths become `file://` URIs; relative paths are kept as written
/// so they stay relative to wherever the output ends up.
pub fn file_uri(path: &str) -> String {
    let fs_path = Path::new(path);
    if fs_path.is_absolute() {
        if let Ok(url) = Url::from_file_path(fs_path) {
            return url.to_string();
        }
    }
    path.to_string()
}
