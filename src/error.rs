//! Error types for rtfclip

use thiserror::Error;

use crate::style::StyleFlag;

/// Result type alias for rtfclip operations
pub type Result<T> = std::result::Result<T, RtfError>;

/// Document and clipboard error types
#[derive(Error, Debug)]
pub enum RtfError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid font name: {0:?}")]
    InvalidFontName(String),

    #[error("Style code {code:?} turns {flag} both on and off")]
    ConflictingStyleCode { flag: StyleFlag, code: String },

    #[error("{program} exited with {status}: {stderr}")]
    CommandFailed {
        program: String,
        status: std::process::ExitStatus,
        stderr: String,
    },

    #[error("No command configured for clipboard {0}")]
    EmptyCommand(&'static str),

    #[error("Config error: {0}")]
    Config(String),

    #[error("{0}")]
    Message(String),
}
