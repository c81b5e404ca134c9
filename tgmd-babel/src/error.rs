//! Error types for format operations

/// Errors that can occur during format operations
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// Error during parsing
    #[error("Parse error: {0}")]
    ParseError(String),
    /// Error during serialization
    #[error("Serialization error: {0}")]
    SerializationError(String),
    /// Format does not support the requested operation
    #[error("Operation not supported: {0}")]
    NotSupported(String),
    /// Reading or writing an artifact failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
