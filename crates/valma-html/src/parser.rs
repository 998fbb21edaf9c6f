//! ast-grep wrapper for HTML sources.

use ast_grep_core::tree_sitter::StrDoc;
use ast_grep_language::SupportLang;

/// The concrete AST tree type returned by [`parse_html`].
pub type HtmlTree = ast_grep_core::AstGrep<StrDoc<SupportLang>>;

/// Parse an HTML document or fragment.
///
/// tree-sitter recovers from malformed markup, so this never fails; callers
/// detect missing structure through the element queries instead.
#[must_use]
pub fn parse_html(source: &str) -> HtmlTree {
    use ast_grep_language::LanguageExt;
    SupportLang::Html.ast_grep(source)
}
