//! Read-only report of which representation each student folder is in.

use std::path::Path;

use valma_core::responses::{FolderStatus, StatusReport, StatusSummary};
use valma_core::{FolderState, StudentFolder, StudentFs};

use crate::batch::{display_name, student_dirs};
use crate::error::TransformError;
use crate::marker::has_router;

/// Inspect every student folder without modifying anything.
///
/// # Errors
/// Fails when the students root is missing or cannot be listed.
pub fn folder_status(
    fs: &dyn StudentFs,
    students_dir: &Path,
) -> Result<StatusReport, TransformError> {
    let mut folders = Vec::new();
    let mut summary = StatusSummary::default();

    for dir in student_dirs(fs, students_dir)? {
        let name = display_name(&dir);
        let folder = match StudentFolder::new(dir) {
            Ok(folder) => folder,
            Err(error) => {
                tracing::warn!(folder = %name, %error, "not a student folder");
                continue;
            }
        };
        let state = folder.detect_state(fs);
        match state {
            FolderState::Split => summary.split += 1,
            FolderState::Merged => summary.merged += 1,
            FolderState::Partial => summary.partial += 1,
            FolderState::Empty => summary.empty += 1,
        }
        let router_marker = fs
            .read_to_string(&folder.script_path())
            .is_ok_and(|script| has_router(&script));

        folders.push(FolderStatus {
            folder: folder.name().to_string(),
            state,
            pages_present: folder.pages_present(fs),
            has_combined: fs.is_file(&folder.combined_path()),
            has_stylesheet: fs.is_file(&folder.style_path()),
            router_marker,
        });
    }

    Ok(StatusReport {
        students_dir: students_dir.display().to_string(),
        folders,
        summary,
    })
}
