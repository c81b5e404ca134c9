//! Format implementations
//!
//! This module contains the formats documents can be read from and written to.

pub mod telegram;
pub mod tree_json;

pub use telegram::{TelegramFormat, TelegramOptions};
pub use tree_json::TreeJsonFormat;
