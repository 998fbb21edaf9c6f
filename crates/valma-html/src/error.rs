//! HTML query error types.

/// Errors raised when a document does not have the expected shape.
#[derive(Debug, thiserror::Error)]
pub enum HtmlError {
    #[error("Element not found: {selector}")]
    MissingElement { selector: String },

    #[error("Element {selector} has no closing tag")]
    Unclosed { selector: String },
}
