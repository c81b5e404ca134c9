//! Document tree to Telegram MarkdownV2 export
//!
//!     This crate turns an already parsed, org-like document tree into the Markdown dialect
//!     accepted by the Telegram Bot API (`parse_mode=MarkdownV2`).
//!
//!     TLDR: For format authors:
//!         - Babel never parses markup itself. Input trees arrive as JSON (see formats/tree_json)
//!         - Translation is per node, bottom-up: a rule only sees its node and the rendered children.
//!         - Every piece of plain text is escaped exactly once. Escaping is not idempotent.
//!         - Collaborators (link resolution, code formatting, source access) are traits in ./common.
//!
//! Architecture
//!
//!     The document tree lives in ./ir/nodes.rs. Formats read it from or write it to a string.
//!     The Telegram exporter is split into escaping (escape.rs), the fragment type that tracks
//!     what has been escaped (fragment.rs), the per-node rules (rules.rs) and the tree walk
//!     (serializer.rs).
//!
//!     This is a pure lib, that is, it powers tgmd-cli but is shell agnostic: no code
//!     should be written that supposes a shell environment, be it std print, env vars etc.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── publish.rs              # One call export, to memory or to a file
//!     ├── formats
//!     │   ├── telegram            # MarkdownV2 export
//!     │   └── tree_json           # JSON document trees
//!     ├── lib.rs
//!     ├── ir                      # Document tree
//!     ├── common                  # Collaborators: links, code formatting, source access
//!
//! Testing
//!     tests
//!     ├── lib.rs
//!     ├── escape.rs
//!     └── telegram
//!         ├── <testname>.rs
//!         └── fixtures
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include these
//!     in the mod.
//!
//! Lossy Conversions
//!
//!     MarkdownV2 is much poorer than the source trees: italic and underline collapse into one
//!     marker, headings deeper than six levels are flattened, tables lose their structure and
//!     code block languages are dropped. Nothing here tries to round trip.
//!
pub mod error;
pub mod format;
pub mod formats;
pub mod publish;
pub mod registry;

pub mod common;
pub mod ir;

pub use error::FormatError;
pub use format::Format;
pub use formats::telegram::{serialize_to_telegram, Exporter, TelegramFormat, TelegramOptions};
pub use formats::tree_json::TreeJsonFormat;
pub use ir::nodes::{Document, Node};
pub use publish::{publish, publish_with, PublishArtifact, PublishResult, PublishSpec};
pub use registry::FormatRegistry;
