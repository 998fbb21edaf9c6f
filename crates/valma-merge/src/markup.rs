//! Fragment rewrites shared by merge and revert.

use valma_core::Section;
use valma_core::layout::STYLE_FILE;
use valma_html::HtmlDocument;

/// Head used when a page has none.
#[must_use]
pub fn default_head(title: &str) -> String {
    format!(
        "<head><meta charset=\"utf-8\"><meta name=\"viewport\" content=\"width=device-width,initial-scale=1.0\"><title>{title}</title></head>"
    )
}

/// Point standalone page links (`studentHome.html`) at hash fragments (`#home`).
#[must_use]
pub fn links_to_hashes(fragment: &str) -> String {
    HtmlDocument::parse(fragment).rewrite_attribute("href", |_, href| {
        Section::from_page_file(href).map(Section::hash)
    })
}

/// Point hash links (`#home`) back at standalone page files.
#[must_use]
pub fn links_to_files(fragment: &str) -> String {
    HtmlDocument::parse(fragment).rewrite_attribute("href", |_, href| {
        Section::from_hash(href).map(|section| section.page_file().to_string())
    })
}

/// Swap the stylesheet `<link>` target and set the title.
///
/// `from` and `to` are compared against the raw `href` value of `link`
/// elements only; other attributes and elements are left alone.
#[must_use]
pub fn retarget_head(head: &str, from: &str, to: &str, title: &str) -> String {
    let relinked = HtmlDocument::parse(head).rewrite_attribute("href", |el, href| {
        (el.is("link") && href == from).then(|| to.to_string())
    });
    HtmlDocument::parse(relinked).replace_inner_of("title", title)
}

/// Head for the combined document: per-student stylesheet becomes the site one.
#[must_use]
pub fn head_for_combined(head: &str, site_stylesheet: &str, title: &str) -> String {
    retarget_head(head, STYLE_FILE, site_stylesheet, title)
}

/// Head for a standalone page: site stylesheet becomes the per-student one.
#[must_use]
pub fn head_for_page(head: &str, site_stylesheet: &str, title: &str) -> String {
    retarget_head(head, site_stylesheet, STYLE_FILE, title)
}

/// Drop leading blank lines and trailing whitespace, keeping the
/// indentation of the first content line.
#[must_use]
pub fn trim_block(text: &str) -> &str {
    let text = text.trim_end();
    let lead = text.len() - text.trim_start().len();
    match text[..lead].rfind('\n') {
        Some(newline) => &text[newline + 1..],
        None => text,
    }
}
