use anyhow::Context;
use valma_core::DiskFs;
use valma_core::responses::BatchReport;
use valma_merge::TransformOptions;

use crate::bootstrap::load_workspace;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;
use crate::progress::Progress;

/// Handle `valma merge`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let workspace = load_workspace(flags)?;
    let options = TransformOptions::from(&workspace.config);
    let total = folder_count(&workspace.students_dir);

    let progress = Progress::bar(total, "merging");
    let report = valma_merge::run_merge_with(&DiskFs, &workspace.students_dir, &options, |outcome| {
        progress.set_message(&outcome.folder);
        progress.inc(1);
    });
    let report = match report {
        Ok(report) => {
            progress.finish_clear();
            report
        }
        Err(error) => {
            progress.finish_err("merge failed");
            return Err(error).context("merge failed");
        }
    };

    print_report(&report, flags)
}

/// Table output lists each folder, then the one-line summary. JSON and raw
/// print the whole report.
pub fn print_report(report: &BatchReport, flags: &GlobalFlags) -> anyhow::Result<()> {
    match flags.format {
        OutputFormat::Table => {
            if !flags.quiet && !report.folders.is_empty() {
                output(&report.folders, flags.format)?;
                if !report.helpers_removed.is_empty() {
                    println!("Removed helpers: {}", report.helpers_removed.join(", "));
                }
            }
            println!("{}", report.summary());
            Ok(())
        }
        OutputFormat::Json | OutputFormat::Raw => output(report, flags.format),
    }
}

/// Best-effort folder count for the progress bar length.
pub fn folder_count(students_dir: &std::path::Path) -> u64 {
    std::fs::read_dir(students_dir).map_or(0, |entries| {
        let dirs = entries
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().is_ok_and(|kind| kind.is_dir()))
            .count();
        u64::try_from(dirs).unwrap_or(u64::MAX)
    })
}
