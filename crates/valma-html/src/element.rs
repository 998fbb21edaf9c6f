//! Owned element spans extracted from the ast-grep tree.

use std::ops::Range;

use ast_grep_core::Node;

/// An attribute on a start tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    /// `None` for bare attributes such as `defer`.
    pub value: Option<String>,
    /// Byte range of the value text, without quotes.
    pub value_range: Option<Range<usize>>,
}

/// An element located in a parsed document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementSpan {
    /// Lowercased tag name.
    pub tag: String,
    pub attributes: Vec<Attribute>,
    /// From `<` of the start tag to `>` of the end tag.
    pub outer: Range<usize>,
    /// Between the start tag and the end tag. Empty for void elements.
    pub inner: Range<usize>,
    /// Whether an explicit end tag was parsed.
    pub closed: bool,
}

impl ElementSpan {
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.name.eq_ignore_ascii_case(name))
            .and_then(|attr| attr.value.as_deref())
    }

    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.attr("id")
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    #[must_use]
    pub fn is(&self, tag: &str) -> bool {
        self.tag.eq_ignore_ascii_case(tag)
    }
}

/// Walk the tree and collect every element, script, and style node in
/// document order.
pub(crate) fn collect_elements<D: ast_grep_core::Doc>(node: &Node<D>, out: &mut Vec<ElementSpan>) {
    let kind = node.kind();
    if matches!(
        kind.as_ref(),
        "element" | "script_element" | "style_element"
    ) {
        if let Some(span) = element_span(node) {
            out.push(span);
        }
    }

    let children: Vec<_> = node.children().collect();
    for child in &children {
        collect_elements(child, out);
    }
}

fn element_span<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<ElementSpan> {
    let start_tag = node
        .children()
        .find(|c| matches!(c.kind().as_ref(), "start_tag" | "self_closing_tag"))?;
    let tag = start_tag
        .children()
        .find(|c| c.kind().as_ref() == "tag_name")?
        .text()
        .to_ascii_lowercase();
    let attributes = attributes_of(&start_tag);

    let outer = node.range();
    let end_tag = node.children().find(|c| c.kind().as_ref() == "end_tag");
    let inner_start = start_tag.range().end;
    let (inner_end, closed) = match &end_tag {
        Some(end) => (end.range().start, true),
        None if start_tag.kind().as_ref() == "self_closing_tag" => (inner_start, true),
        None => (outer.end.max(inner_start), false),
    };

    Some(ElementSpan {
        tag,
        attributes,
        outer,
        inner: inner_start..inner_end,
        closed,
    })
}

fn attributes_of<D: ast_grep_core::Doc>(tag_node: &Node<D>) -> Vec<Attribute> {
    tag_node
        .children()
        .filter(|c| c.kind().as_ref() == "attribute")
        .filter_map(|attr| {
            let name = attr
                .children()
                .find(|c| c.kind().as_ref() == "attribute_name")?
                .text()
                .to_string();
            let (value, value_range) = attribute_value(&attr);
            Some(Attribute {
                name,
                value,
                value_range,
            })
        })
        .collect()
}

/// Quoted values carry the text in a nested `attribute_value`; an empty
/// quoted value has no such child, so its range is the point between quotes.
fn attribute_value<D: ast_grep_core::Doc>(
    attr: &Node<D>,
) -> (Option<String>, Option<Range<usize>>) {
    for child in attr.children() {
        match child.kind().as_ref() {
            "attribute_value" => {
                return (Some(child.text().to_string()), Some(child.range()));
            }
            "quoted_attribute_value" => {
                if let Some(inner) = child
                    .children()
                    .find(|c| c.kind().as_ref() == "attribute_value")
                {
                    return (Some(inner.text().to_string()), Some(inner.range()));
                }
                let quoted = child.range();
                let point = quoted.start + 1;
                return (Some(String::new()), Some(point..point));
            }
            _ => {}
        }
    }
    (None, None)
}
