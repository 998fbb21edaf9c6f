use anyhow::Context;
use valma_core::DiskFs;
use valma_merge::TransformOptions;

use crate::bootstrap::load_workspace;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::RevertArgs;
use crate::commands::merge::{folder_count, print_report};
use crate::progress::Progress;

/// Handle `valma revert`.
pub fn handle(args: &RevertArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let workspace = load_workspace(flags)?;
    let mut options = TransformOptions::from(&workspace.config);
    if args.keep_helpers {
        options.remove_helpers = false;
    }

    let progress = Progress::bar(folder_count(&workspace.students_dir), "reverting");
    let report = valma_merge::run_revert_with(
        &DiskFs,
        &workspace.project_root,
        &workspace.students_dir,
        &options,
        |outcome| {
            progress.set_message(&outcome.folder);
            progress.inc(1);
        },
    );
    let report = match report {
        Ok(report) => {
            progress.finish_clear();
            report
        }
        Err(error) => {
            progress.finish_err("revert failed");
            return Err(error).context("revert failed");
        }
    };

    print_report(&report, flags)
}
