//! Collaborators the exporter relies on: link resolution, code block
//! formatting and access to the original source.

pub mod code;
pub mod links;
pub mod source;
