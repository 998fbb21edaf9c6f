//! Parsed document with element lookups and span rewrites.

use std::ops::Range;

use crate::element::{ElementSpan, collect_elements};
use crate::error::HtmlError;
use crate::parser::parse_html;
use crate::rewrite::{Edit, splice};

/// An HTML source together with its element index.
///
/// The index is built once at parse time; rewrites return new strings and
/// leave the document untouched.
#[derive(Debug, Clone)]
pub struct HtmlDocument {
    source: String,
    elements: Vec<ElementSpan>,
}

impl HtmlDocument {
    #[must_use]
    pub fn parse(source: impl Into<String>) -> Self {
        let source = source.into();
        let mut elements = Vec::new();
        {
            let tree = parse_html(&source);
            collect_elements(&tree.root(), &mut elements);
        }
        Self { source, elements }
    }

    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Every element in document order.
    #[must_use]
    pub fn elements(&self) -> &[ElementSpan] {
        &self.elements
    }

    // ── lookups ──────────────────────────────────────────────────────

    #[must_use]
    pub fn element_by_tag(&self, tag: &str) -> Option<&ElementSpan> {
        self.elements.iter().find(|el| el.is(tag))
    }

    #[must_use]
    pub fn element_by_id(&self, id: &str) -> Option<&ElementSpan> {
        self.elements.iter().find(|el| el.id() == Some(id))
    }

    #[must_use]
    pub fn element_by_tag_and_id(&self, tag: &str, id: &str) -> Option<&ElementSpan> {
        self.elements
            .iter()
            .find(|el| el.is(tag) && el.id() == Some(id))
    }

    /// First element carrying `class` among its class tokens.
    #[must_use]
    pub fn element_by_class(&self, class: &str) -> Option<&ElementSpan> {
        self.elements.iter().find(|el| el.has_class(class))
    }

    #[must_use]
    pub fn script_by_src(&self, src: &str) -> Option<&ElementSpan> {
        self.elements
            .iter()
            .find(|el| el.is("script") && el.attr("src") == Some(src))
    }

    // ── required lookups ─────────────────────────────────────────────

    /// Like [`Self::element_by_tag`], but the element must exist.
    ///
    /// # Errors
    /// Returns [`HtmlError::MissingElement`] when no element matches.
    pub fn require_tag(&self, tag: &str) -> Result<&ElementSpan, HtmlError> {
        self.element_by_tag(tag)
            .ok_or_else(|| HtmlError::MissingElement {
                selector: format!("<{tag}>"),
            })
    }

    /// Like [`Self::element_by_class`], but the element must exist and be
    /// closed, so its inner range is trustworthy.
    ///
    /// # Errors
    /// Returns [`HtmlError::MissingElement`] or [`HtmlError::Unclosed`].
    pub fn require_class(&self, class: &str) -> Result<&ElementSpan, HtmlError> {
        let selector = format!(".{class}");
        let el = self
            .element_by_class(class)
            .ok_or_else(|| HtmlError::MissingElement {
                selector: selector.clone(),
            })?;
        if el.closed {
            Ok(el)
        } else {
            Err(HtmlError::Unclosed { selector })
        }
    }

    // ── text access ──────────────────────────────────────────────────

    #[must_use]
    pub fn outer_text(&self, el: &ElementSpan) -> &str {
        self.slice(el.outer.clone())
    }

    #[must_use]
    pub fn inner_text(&self, el: &ElementSpan) -> &str {
        self.slice(el.inner.clone())
    }

    /// Source text for `range`, or `""` when the range is out of bounds.
    #[must_use]
    pub fn slice(&self, range: Range<usize>) -> &str {
        self.source.get(range).unwrap_or("")
    }

    // ── rewrites ─────────────────────────────────────────────────────

    /// Rewrite values of attribute `name` on every element.
    ///
    /// `f` receives the owning element and the current value; returning
    /// `Some(new)` replaces the value text, quotes untouched.
    #[must_use]
    pub fn rewrite_attribute<F>(&self, name: &str, mut f: F) -> String
    where
        F: FnMut(&ElementSpan, &str) -> Option<String>,
    {
        let mut edits = Vec::new();
        for el in &self.elements {
            for attr in &el.attributes {
                if !attr.name.eq_ignore_ascii_case(name) {
                    continue;
                }
                let (Some(value), Some(range)) = (&attr.value, &attr.value_range) else {
                    continue;
                };
                if let Some(text) = f(el, value) {
                    edits.push(Edit {
                        range: range.clone(),
                        text,
                    });
                }
            }
        }
        splice(&self.source, edits)
    }

    /// Replace the body of the first `tag` element.
    ///
    /// Returns the source unchanged when there is no such element.
    #[must_use]
    pub fn replace_inner_of(&self, tag: &str, text: &str) -> String {
        match self.element_by_tag(tag) {
            Some(el) => splice(
                &self.source,
                vec![Edit {
                    range: el.inner.clone(),
                    text: text.to_string(),
                }],
            ),
            None => self.source.clone(),
        }
    }
}
