//! Cross-cutting error types for VALMAtrack.
//!
//! Domain-specific errors (`ConfigError`, `HtmlError`, `TransformError`) live in
//! their own crates. The CLI converges them through `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any VALMAtrack crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A section id or page file name did not name one of the four sections.
    #[error("Unknown section: {0}")]
    UnknownSection(String),

    /// A student folder path has no usable final component.
    #[error("Invalid student folder path: {0}")]
    InvalidFolder(String),

    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
