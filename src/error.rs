//! Error types and handling for Agentgen
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Agentgen operations
#[derive(Error, Diagnostic, Debug)]
pub enum AgentgenError {
    // Template directory errors
    #[error("Template directory not found: {path}")]
    #[diagnostic(
        code(agentgen::templates::dir_not_found),
        help("Create the directory or point --templates at an existing one")
    )]
    TemplateDirNotFound { path: String },

    #[error("Failed to list template directory: {path}")]
    #[diagnostic(code(agentgen::templates::list_failed))]
    TemplateDirListFailed { path: String, reason: String },

    #[error("Invalid template pattern: {pattern}")]
    #[diagnostic(
        code(agentgen::templates::invalid_pattern),
        help("Patterns use glob syntax, e.g. '*.md' or 'agent-*.md'")
    )]
    InvalidPattern { pattern: String, reason: String },

    // Per-file errors
    #[error("Failed to read file: {path}")]
    #[diagnostic(code(agentgen::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}")]
    #[diagnostic(code(agentgen::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Failed to serialize header for: {path}")]
    #[diagnostic(code(agentgen::template::serialize_failed))]
    HeaderSerializeFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(agentgen::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for AgentgenError {
    fn from(err: std::io::Error) -> Self {
        AgentgenError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, AgentgenError>;
