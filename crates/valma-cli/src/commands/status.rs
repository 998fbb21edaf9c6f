use anyhow::Context;
use valma_core::DiskFs;

use crate::bootstrap::load_workspace;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;

/// Handle `valma status`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let workspace = load_workspace(flags)?;
    let report = valma_merge::folder_status(&DiskFs, &workspace.students_dir)
        .context("status failed")?;

    match flags.format {
        OutputFormat::Table => {
            output(&report.folders, flags.format)?;
            let summary = &report.summary;
            println!(
                "split: {} merged: {} partial: {} empty: {}",
                summary.split, summary.merged, summary.partial, summary.empty
            );
            Ok(())
        }
        OutputFormat::Json | OutputFormat::Raw => output(&report, flags.format),
    }
}
