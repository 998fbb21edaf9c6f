//! # valma-html
//!
//! Structural HTML queries for the student page transforms.
//!
//! Documents are parsed with ast-grep's tree-sitter HTML grammar and indexed
//! into owned [`ElementSpan`]s (tag, attributes, outer and inner byte ranges).
//! Rewrites splice replacement text into those ranges, so untouched markup
//! keeps its exact formatting and elements are located by tag, id, or class
//! regardless of attribute order or whitespace.

mod document;
mod element;
mod error;
mod parser;
mod rewrite;

#[cfg(test)]
mod tests;

pub use document::HtmlDocument;
pub use element::{Attribute, ElementSpan};
pub use error::HtmlError;
pub use parser::{HtmlTree, parse_html};
pub use rewrite::{Edit, splice};
