//! Split state -> merged state for one student folder.

use std::path::Path;

use valma_core::layout::{MAIN_CONTENT_CLASS, PAGE_CLASS, PAGES_CONTAINER_ID, SCRIPT_FILE};
use valma_core::{Section, StudentFolder, StudentFs};
use valma_html::{HtmlDocument, HtmlError};

use crate::error::TransformError;
use crate::marker::append_router;
use crate::markup::{default_head, head_for_combined, links_to_hashes, trim_block};
use crate::options::TransformOptions;

/// Sidebar and content block of one standalone page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageParts {
    /// Body markup before the main-content wrapper.
    pub sidebar: String,
    /// Inner markup of the main-content wrapper, followed by any sibling
    /// markup that sits between the wrapper and the script tag.
    pub content: String,
    /// Outer `<head>` markup, if the page has one.
    pub head: Option<String>,
}

/// Extract the parts of a standalone page.
///
/// # Errors
/// Returns [`TransformError::Extraction`] when the page has no `<body>`, no
/// closed `.main-content` element, or the element sits outside the body.
pub fn extract_page_parts(file: &str, html: &str) -> Result<PageParts, TransformError> {
    let extraction = |source: HtmlError| TransformError::Extraction {
        file: file.to_string(),
        source,
    };

    let doc = HtmlDocument::parse(html);
    let body = doc.require_tag("body").map_err(extraction)?;
    let main = doc.require_class(MAIN_CONTENT_CLASS).map_err(extraction)?;
    if main.outer.start < body.inner.start || main.outer.end > body.inner.end {
        return Err(extraction(HtmlError::MissingElement {
            selector: format!("body > .{MAIN_CONTENT_CLASS}"),
        }));
    }

    let tail_end = doc
        .script_by_src(SCRIPT_FILE)
        .map(|script| script.outer.start)
        .filter(|start| *start >= main.outer.end && *start <= body.inner.end)
        .unwrap_or(body.inner.end);

    let sidebar = trim_block(doc.slice(body.inner.start..main.outer.start)).to_string();
    let mut content = trim_block(doc.inner_text(main)).to_string();
    let trailing = trim_block(doc.slice(main.outer.end..tail_end));
    if !trailing.is_empty() {
        tracing::debug!(file, "keeping markup between main content and script");
        content.push('\n');
        content.push_str(trailing);
    }

    Ok(PageParts {
        sidebar,
        content,
        head: doc
            .element_by_tag("head")
            .map(|head| doc.outer_text(head).to_string()),
    })
}

/// Assemble the combined document.
#[must_use]
pub fn build_combined(head: &str, sidebar: &str, sections: &[(Section, String)]) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n");
    out.push_str(head);
    out.push_str("\n<body>\n");
    out.push_str(sidebar);
    out.push_str(&format!("\n<div id=\"{PAGES_CONTAINER_ID}\">\n"));
    for (section, content) in sections {
        out.push_str(&format!(
            "  <section id=\"{}\" class=\"{PAGE_CLASS}\">\n{content}\n  </section>\n",
            section.id()
        ));
    }
    out.push_str(&format!(
        "</div>\n<script src=\"{SCRIPT_FILE}\" defer></script>\n</body>\n</html>\n"
    ));
    out
}

/// Merge one student folder.
///
/// Nothing is written unless every required file is present, readable, and
/// has the expected structure.
///
/// # Errors
/// Returns the reason the folder was skipped.
pub fn merge_folder(
    fs: &dyn StudentFs,
    folder: &StudentFolder,
    options: &TransformOptions,
) -> Result<(), TransformError> {
    for section in Section::ALL {
        if !fs.is_file(&folder.page_path(section)) {
            return Err(TransformError::MissingFile(section.page_file().to_string()));
        }
    }
    let script_path = folder.script_path();
    if !fs.is_file(&script_path) {
        return Err(TransformError::MissingFile(SCRIPT_FILE.to_string()));
    }

    let mut parts = Vec::with_capacity(Section::ALL.len());
    for section in Section::ALL {
        let html = read(fs, &folder.page_path(section), section.page_file())?;
        if html.trim().is_empty() {
            return Err(TransformError::Unreadable {
                file: section.page_file().to_string(),
                source: std::io::Error::new(std::io::ErrorKind::InvalidData, "file is empty"),
            });
        }
        parts.push((section, extract_page_parts(section.page_file(), &html)?));
    }
    let script = read(fs, &script_path, SCRIPT_FILE)?;

    let title = options.page_title("Student");
    let (home_head, home_sidebar) = parts
        .first()
        .map(|(_, home)| (home.head.clone(), home.sidebar.clone()))
        .unwrap_or_default();
    let head = home_head.map_or_else(
        || default_head(&title),
        |head| head_for_combined(&head, &options.site_stylesheet, &title),
    );
    let sidebar = links_to_hashes(&home_sidebar);
    let sections: Vec<(Section, String)> = parts
        .into_iter()
        .map(|(section, page)| (section, page.content))
        .collect();

    let combined = build_combined(&head, &sidebar, &sections);
    write(fs, &folder.combined_path(), &combined)?;

    if let Some(patched) = append_router(&script) {
        write(fs, &script_path, &patched)?;
    } else {
        tracing::debug!(folder = folder.name(), "router already present");
    }

    for section in Section::ALL {
        remove_quietly(fs, &folder.page_path(section));
    }
    let style_path = folder.style_path();
    if fs.is_file(&style_path) {
        remove_quietly(fs, &style_path);
    }

    Ok(())
}

pub(crate) fn read(fs: &dyn StudentFs, path: &Path, file: &str) -> Result<String, TransformError> {
    fs.read_to_string(path)
        .map_err(|source| TransformError::Unreadable {
            file: file.to_string(),
            source,
        })
}

pub(crate) fn write(
    fs: &dyn StudentFs,
    path: &Path,
    contents: &str,
) -> Result<(), TransformError> {
    fs.write(path, contents)
        .map_err(|source| TransformError::Unwritable {
            file: path
                .file_name()
                .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().to_string()),
            source,
        })
}

pub(crate) fn remove_quietly(fs: &dyn StudentFs, path: &Path) {
    if let Err(error) = fs.remove_file(path) {
        tracing::warn!(path = %path.display(), %error, "failed to delete file");
    }
}
