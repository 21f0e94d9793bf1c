//! Error types for chunktag

use thiserror::Error;

/// Main error type for chunktag
///
/// The permissive core (taxonomy lookups, compact codes, span rendering)
/// never produces one of these; they come from strict parsing, opt-in
/// validation and configuration loading.
#[derive(Debug, Error)]
pub enum ChunkError {
    #[error("Unknown chunk tag: {0}")]
    UnknownTag(String),

    #[error("Malformed chunk span: {0}")]
    MalformedSpan(String),

    #[error("Invalid chunk span {span}: {reason}")]
    InvalidSpan { span: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ChunkError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ChunkError::UnknownTag(_) => 2,
            ChunkError::MalformedSpan(_) => 3,
            ChunkError::InvalidSpan { .. } => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            ChunkError::UnknownTag(name) => {
                format!(
                    "Unknown chunk tag: '{}'\n\n\
                    Suggestions:\n\
                    • Tag names are case-sensitive (e.g., NP, not np)\n\
                    • Run 'chunktag tags' to list every phrase category",
                    name
                )
            }
            ChunkError::MalformedSpan(text) => {
                format!(
                    "Malformed chunk span: '{}'\n\n\
                    Expected format: LABEL(LEFT, RIGHT)\n\
                    Examples:\n\
                    NP(2, 4)\n\
                    UNDEFINED(0, 0)",
                    text
                )
            }
            ChunkError::InvalidSpan { .. } => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check the index base in your config (zero or one)\n\
                    • Pass the sentence length with --tokens\n\
                    • Disable strict_bounds to accept the span as-is",
                    self
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using ChunkError
pub type Result<T> = std::result::Result<T, ChunkError>;
