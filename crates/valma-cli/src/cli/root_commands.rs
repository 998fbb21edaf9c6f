use clap::{Args, Subcommand};

use crate::cli::subcommands::PageCommands;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Merge each student's four pages into one hash-routed student.html.
    Merge,
    /// Split each student.html back into standalone pages.
    Revert(RevertArgs),
    /// Show which layout each student folder is in.
    Status,
    /// Page behavior of the combined document.
    Page {
        #[command(subcommand)]
        action: PageCommands,
    },
}

#[derive(Clone, Debug, Args)]
pub struct RevertArgs {
    /// Leave the migration helper scripts in place.
    #[arg(long)]
    pub keep_helpers: bool,
}
