//! Student folder layout: file names, element ids, and state detection.

use std::path::{Path, PathBuf};

use crate::enums::{FolderState, Section};
use crate::errors::CoreError;
use crate::fs::StudentFs;

/// Combined document written by merge.
pub const COMBINED_FILE: &str = "student.html";
/// Shared per-student script. Present in both states.
pub const SCRIPT_FILE: &str = "studentScript.js";
/// Per-student stylesheet. Present in the split state only.
pub const STYLE_FILE: &str = "studentStyle.css";

/// Class of the content wrapper in standalone pages.
pub const MAIN_CONTENT_CLASS: &str = "main-content";
/// Id of the content wrapper regenerated by revert.
pub const MAIN_CONTENT_ID: &str = "mainContent";
/// Id of the container holding all sections in the combined document.
pub const PAGES_CONTAINER_ID: &str = "pages-container";
/// Class shared by every section in the combined document.
pub const PAGE_CLASS: &str = "page";

/// Site stylesheet as referenced from inside a student folder.
pub const DEFAULT_SITE_STYLESHEET: &str = "../../style.css";
/// Brand used in page titles.
pub const DEFAULT_TITLE_PREFIX: &str = "VALMAtrack";

/// A single student folder under the students root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentFolder {
    root: PathBuf,
    name: String,
}

impl StudentFolder {
    /// Wrap a folder path. The folder name is its last path component.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidFolder`] when the path has no UTF-8 file name.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, CoreError> {
        let root = root.into();
        let name = root
            .file_name()
            .and_then(|name| name.to_str())
            .map(str::to_string)
            .ok_or_else(|| CoreError::InvalidFolder(root.display().to_string()))?;
        Ok(Self { root, name })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn page_path(&self, section: Section) -> PathBuf {
        self.root.join(section.page_file())
    }

    #[must_use]
    pub fn combined_path(&self) -> PathBuf {
        self.root.join(COMBINED_FILE)
    }

    #[must_use]
    pub fn script_path(&self) -> PathBuf {
        self.root.join(SCRIPT_FILE)
    }

    #[must_use]
    pub fn style_path(&self) -> PathBuf {
        self.root.join(STYLE_FILE)
    }

    /// Sections whose standalone page file exists.
    #[must_use]
    pub fn pages_present(&self, fs: &dyn StudentFs) -> Vec<Section> {
        Section::ALL
            .into_iter()
            .filter(|section| fs.is_file(&self.page_path(*section)))
            .collect()
    }

    /// Classify the folder by which files it holds.
    #[must_use]
    pub fn detect_state(&self, fs: &dyn StudentFs) -> FolderState {
        let pages = self.pages_present(fs).len();
        let combined = fs.is_file(&self.combined_path());
        let script = fs.is_file(&self.script_path());

        match (pages, combined, script) {
            (4, false, true) => FolderState::Split,
            (0, true, _) => FolderState::Merged,
            (0, false, false) => FolderState::Empty,
            _ => FolderState::Partial,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::fs::MemoryFs;

    fn split_fs(folder: &str) -> MemoryFs {
        let fs = MemoryFs::new();
        for section in Section::ALL {
            fs.insert(format!("{folder}/{}", section.page_file()), "<html></html>");
        }
        fs.insert(format!("{folder}/{SCRIPT_FILE}"), "");
        fs.insert(format!("{folder}/{STYLE_FILE}"), "");
        fs
    }

    #[test]
    fn folder_name_is_last_component() {
        let folder = StudentFolder::new("/site/public/student/CRUZ_ANA").unwrap();
        assert_eq!(folder.name(), "CRUZ_ANA");
        assert_eq!(
            folder.page_path(Section::Settings),
            PathBuf::from("/site/public/student/CRUZ_ANA/studentSettings.html")
        );
    }

    #[test]
    fn folder_without_name_is_rejected() {
        assert!(StudentFolder::new("/").is_err());
    }

    #[test]
    fn detects_split_state() {
        let fs = split_fs("/s/a");
        let folder = StudentFolder::new("/s/a").unwrap();
        assert_eq!(folder.detect_state(&fs), FolderState::Split);
    }

    #[test]
    fn detects_merged_state() {
        let fs = MemoryFs::new()
            .with_file("/s/a/student.html", "<html></html>")
            .with_file("/s/a/studentScript.js", "");
        let folder = StudentFolder::new("/s/a").unwrap();
        assert_eq!(folder.detect_state(&fs), FolderState::Merged);
    }

    #[test]
    fn detects_partial_and_empty_states() {
        let fs = split_fs("/s/a");
        fs.remove_file(Path::new("/s/a/studentProfile.html")).unwrap();
        fs.create_dir("/s/b");
        assert_eq!(
            StudentFolder::new("/s/a").unwrap().detect_state(&fs),
            FolderState::Partial
        );
        assert_eq!(
            StudentFolder::new("/s/b").unwrap().detect_state(&fs),
            FolderState::Empty
        );
    }
}
