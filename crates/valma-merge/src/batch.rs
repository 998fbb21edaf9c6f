//! Batch runners over every student folder under the students root.

use std::path::{Path, PathBuf};

use valma_core::responses::{BatchReport, FolderOutcome};
use valma_core::{BatchOperation, StudentFolder, StudentFs};

use crate::error::TransformError;
use crate::merge::merge_folder;
use crate::options::TransformOptions;
use crate::revert::{remove_helpers, revert_folder};

/// Immediate subdirectories of `students_dir`, in name order.
///
/// # Errors
/// Returns [`TransformError::StudentsDirNotFound`] when the root is missing and
/// [`TransformError::ListDir`] when it cannot be listed.
pub fn student_dirs(
    fs: &dyn StudentFs,
    students_dir: &Path,
) -> Result<Vec<PathBuf>, TransformError> {
    if !fs.is_dir(students_dir) {
        return Err(TransformError::StudentsDirNotFound(students_dir.to_path_buf()));
    }
    fs.list_dirs(students_dir)
        .map_err(|source| TransformError::ListDir {
            path: students_dir.to_path_buf(),
            source,
        })
}

/// Folder name for reports, even when it is not valid UTF-8.
pub(crate) fn display_name(dir: &Path) -> String {
    dir.file_name().map_or_else(
        || dir.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}

fn run_each<F, C>(
    fs: &dyn StudentFs,
    students_dir: &Path,
    operation: BatchOperation,
    mut transform: F,
    mut on_folder: C,
) -> Result<BatchReport, TransformError>
where
    F: FnMut(&StudentFolder) -> Result<(), TransformError>,
    C: FnMut(&FolderOutcome),
{
    let dirs = student_dirs(fs, students_dir)?;
    tracing::info!(
        operation = %operation,
        students_dir = %students_dir.display(),
        folders = dirs.len(),
        "starting batch"
    );

    let mut report = BatchReport::new(operation);
    for dir in dirs {
        let name = display_name(&dir);
        let result = StudentFolder::new(dir)
            .map_err(TransformError::from)
            .and_then(|folder| transform(&folder));
        let outcome = match result {
            Ok(()) => {
                tracing::debug!(folder = %name, "processed");
                FolderOutcome::processed(name)
            }
            Err(error) => {
                tracing::warn!(folder = %name, %error, "skipped");
                FolderOutcome::skipped(name, error.to_string())
            }
        };
        on_folder(&outcome);
        report.record(outcome);
    }
    Ok(report)
}

/// Merge every student folder.
///
/// # Errors
/// Fails only when the students root cannot be listed; per-folder problems
/// are recorded as skipped outcomes.
pub fn run_merge(
    fs: &dyn StudentFs,
    students_dir: &Path,
    options: &TransformOptions,
) -> Result<BatchReport, TransformError> {
    run_merge_with(fs, students_dir, options, |_| {})
}

/// [`run_merge`] with a callback after each folder, e.g. for progress.
///
/// # Errors
/// See [`run_merge`].
pub fn run_merge_with(
    fs: &dyn StudentFs,
    students_dir: &Path,
    options: &TransformOptions,
    on_folder: impl FnMut(&FolderOutcome),
) -> Result<BatchReport, TransformError> {
    let report = run_each(
        fs,
        students_dir,
        BatchOperation::Merge,
        |folder| merge_folder(fs, folder, options),
        on_folder,
    )?;
    tracing::info!(summary = %report.summary(), "merge finished");
    Ok(report)
}

/// Revert every student folder, then remove the helper files.
///
/// # Errors
/// See [`run_merge`].
pub fn run_revert(
    fs: &dyn StudentFs,
    project_root: &Path,
    students_dir: &Path,
    options: &TransformOptions,
) -> Result<BatchReport, TransformError> {
    run_revert_with(fs, project_root, students_dir, options, |_| {})
}

/// [`run_revert`] with a callback after each folder.
///
/// # Errors
/// See [`run_merge`].
pub fn run_revert_with(
    fs: &dyn StudentFs,
    project_root: &Path,
    students_dir: &Path,
    options: &TransformOptions,
    on_folder: impl FnMut(&FolderOutcome),
) -> Result<BatchReport, TransformError> {
    let mut report = run_each(
        fs,
        students_dir,
        BatchOperation::Revert,
        |folder| revert_folder(fs, folder, options),
        on_folder,
    )?;
    if options.remove_helpers {
        report.helpers_removed = remove_helpers(fs, project_root, &options.helpers);
        if !report.helpers_removed.is_empty() {
            tracing::info!(removed = ?report.helpers_removed, "helper files removed");
        }
    }
    tracing::info!(summary = %report.summary(), "revert finished");
    Ok(report)
}
