//! Merged state -> split state for one student folder.

use std::path::{Path, PathBuf};

use valma_core::layout::{
    COMBINED_FILE, MAIN_CONTENT_CLASS, MAIN_CONTENT_ID, PAGE_CLASS, PAGES_CONTAINER_ID,
    SCRIPT_FILE,
};
use valma_core::{Section, StudentFolder, StudentFs};
use valma_html::{HtmlDocument, HtmlError};

use crate::error::TransformError;
use crate::marker::strip_router;
use crate::markup::{default_head, head_for_page, links_to_files, trim_block};
use crate::merge::{read, remove_quietly, write};
use crate::options::TransformOptions;

/// Standalone page regenerated from one combined-document section.
#[must_use]
pub fn build_page(head: &str, sidebar: &str, content: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n{head}\n<body>\n{sidebar}\n\
         <div class=\"{MAIN_CONTENT_CLASS}\" id=\"{MAIN_CONTENT_ID}\">\n{content}\n</div>\n\
         <script src=\"{SCRIPT_FILE}\"></script>\n</body>\n</html>\n"
    )
}

/// Revert one student folder.
///
/// Pages are regenerated only for sections found in the combined document.
/// A combined document without any section is left in place.
///
/// # Errors
/// Returns the reason the folder was skipped.
pub fn revert_folder(
    fs: &dyn StudentFs,
    folder: &StudentFolder,
    options: &TransformOptions,
) -> Result<(), TransformError> {
    let combined_path = folder.combined_path();
    if !fs.is_file(&combined_path) {
        return Err(TransformError::NoCombinedDocument);
    }
    let html = read(fs, &combined_path, COMBINED_FILE)?;
    let doc = HtmlDocument::parse(html);

    let body = doc
        .require_tag("body")
        .map_err(|source| TransformError::Extraction {
            file: COMBINED_FILE.to_string(),
            source,
        })?;

    let sidebar_end = doc
        .element_by_id(PAGES_CONTAINER_ID)
        .map_or(body.inner.end, |container| container.outer.start);
    let sidebar = links_to_files(trim_block(doc.slice(body.inner.start..sidebar_end)));

    let mut pages: Vec<(Section, String)> = Vec::new();
    for section in Section::ALL {
        let Some(el) = doc
            .elements()
            .iter()
            .find(|el| el.is("section") && el.id() == Some(section.id()))
        else {
            tracing::info!(folder = folder.name(), section = section.id(), "section absent");
            continue;
        };
        if !el.closed {
            return Err(TransformError::Extraction {
                file: COMBINED_FILE.to_string(),
                source: HtmlError::Unclosed {
                    selector: format!("section#{}", section.id()),
                },
            });
        }
        if !el.has_class(PAGE_CLASS) {
            tracing::debug!(section = section.id(), "section without page class");
        }
        pages.push((section, trim_block(doc.inner_text(el)).to_string()));
    }
    if pages.is_empty() {
        return Err(TransformError::NoSections);
    }

    let head = doc.element_by_tag("head").map(|head| doc.outer_text(head));
    for (section, content) in &pages {
        let title = options.page_title(section.title());
        let page_head = head.map_or_else(
            || default_head(&title),
            |head| head_for_page(head, &options.site_stylesheet, &title),
        );
        write(
            fs,
            &folder.page_path(*section),
            &build_page(&page_head, &sidebar, content),
        )?;
    }

    write(fs, &folder.style_path(), &options.stylesheet_stub())?;

    let script_path = folder.script_path();
    if fs.is_file(&script_path) {
        let script = read(fs, &script_path, SCRIPT_FILE)?;
        if let Some(stripped) = strip_router(&script) {
            write(fs, &script_path, &stripped)?;
        }
    }

    remove_quietly(fs, &combined_path);
    Ok(())
}

/// Delete the helper files that exist under `project_root`.
///
/// Returns the helpers that were removed, as configured.
pub fn remove_helpers(fs: &dyn StudentFs, project_root: &Path, helpers: &[String]) -> Vec<String> {
    let mut removed = Vec::new();
    for helper in helpers {
        let path: PathBuf = project_root.join(helper);
        if !fs.is_file(&path) {
            continue;
        }
        match fs.remove_file(&path) {
            Ok(()) => removed.push(helper.clone()),
            Err(error) => {
                tracing::warn!(helper = %helper, %error, "failed to remove helper");
            }
        }
    }
    removed
}
