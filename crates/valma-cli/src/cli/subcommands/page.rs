use clap::Subcommand;

/// Inspect page behavior of the combined student document.
#[derive(Clone, Debug, Subcommand)]
pub enum PageCommands {
    /// Show which section a hash selects and which initializers run.
    Route {
        /// URL hash, e.g. `#calendar` (defaults to home).
        hash: Option<String>,
    },
    /// Show the streak tier and badge icon for a streak length.
    Streak {
        /// Streak length in days.
        days: u32,
    },
    /// Print the widget fragments the section initializer renders.
    Render {
        /// URL hash, e.g. `#home` (defaults to home).
        hash: Option<String>,
    },
}
