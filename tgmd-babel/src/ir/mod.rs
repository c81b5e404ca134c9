//! Intermediate Representation (IR) for exported documents.
//!
//! This module defines the format-agnostic tree the exporter walks. The tree
//! is produced outside this crate (by a markup parser) and reaches us either
//! in memory or through the `tree-json` format.

pub mod nodes;
