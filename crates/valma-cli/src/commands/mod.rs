pub mod merge;
pub mod page;
pub mod revert;
pub mod status;

use crate::cli::{Commands, GlobalFlags};

/// Route a parsed command to its handler.
pub fn dispatch(command: &Commands, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Merge => merge::handle(flags),
        Commands::Revert(args) => revert::handle(args, flags),
        Commands::Status => status::handle(flags),
        Commands::Page { action } => page::handle(action, flags),
    }
}
