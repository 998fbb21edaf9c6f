use std::path::PathBuf;

use thiserror::Error;
use valma_core::CoreError;
use valma_html::HtmlError;

/// Errors from the merge and revert transforms.
///
/// Folder-level variants turn into a skipped outcome in the batch report;
/// only [`TransformError::StudentsDirNotFound`] and directory listing
/// failures abort a batch.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("students directory not found: {0}")]
    StudentsDirNotFound(PathBuf),

    #[error("failed to list {path}: {source}")]
    ListDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("missing required file {0}")]
    MissingFile(String),

    #[error("could not read {file}: {source}")]
    Unreadable {
        file: String,
        #[source]
        source: std::io::Error,
    },

    #[error("could not write {file}: {source}")]
    Unwritable {
        file: String,
        #[source]
        source: std::io::Error,
    },

    #[error("could not extract parts from {file}: {source}")]
    Extraction {
        file: String,
        #[source]
        source: HtmlError,
    },

    #[error("no combined document")]
    NoCombinedDocument,

    #[error("combined document has no page sections")]
    NoSections,

    #[error(transparent)]
    Core(#[from] CoreError),
}
