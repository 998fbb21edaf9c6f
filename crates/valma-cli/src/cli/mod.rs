use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{ColorMode, GlobalFlags, OutputFormat, ProgressMode};
pub use root_commands::Commands;

/// Top-level CLI parser for the `valma` binary.
#[derive(Debug, Parser)]
#[command(
    name = "valma",
    version,
    about = "VALMAtrack - merge and revert student attendance pages"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project root path (defaults to the current directory)
    #[arg(short, long, global = true)]
    pub project: Option<String>,

    /// Students root, relative to the project root (overrides config)
    #[arg(short, long, global = true)]
    pub students_dir: Option<String>,

    /// Color table output: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,

    /// Progress bar: auto, on, off
    #[arg(long, global = true, default_value = "auto")]
    pub progress: ProgressMode,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            project: self.project.clone(),
            students_dir: self.students_dir.clone(),
            color: self.color,
            progress: self.progress,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::subcommands::PageCommands;
    use super::{Cli, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn default_format_is_table() {
        let cli = Cli::try_parse_from(["valma", "status"]).expect("cli should parse");
        assert_eq!(cli.format, OutputFormat::Table);
        assert!(matches!(cli.command, Commands::Status));
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["valma", "--format", "json", "--verbose", "merge"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Merge));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["valma", "status", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
    }

    #[test]
    fn revert_accepts_keep_helpers() {
        let cli = Cli::try_parse_from(["valma", "revert", "--keep-helpers"])
            .expect("cli should parse");
        let Commands::Revert(args) = cli.command else {
            panic!("expected revert");
        };
        assert!(args.keep_helpers);
    }

    #[test]
    fn page_commands_parse() {
        let cli = Cli::try_parse_from(["valma", "page", "route", "#calendar"])
            .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Page {
                action: PageCommands::Route { hash: Some(ref h) }
            } if h == "#calendar"
        ));

        let cli = Cli::try_parse_from(["valma", "page", "streak", "42"]).expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Page {
                action: PageCommands::Streak { days: 42 }
            }
        ));

        let cli = Cli::try_parse_from(["valma", "page", "render"]).expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Page {
                action: PageCommands::Render { hash: None }
            }
        ));
    }

    #[test]
    fn streak_rejects_negative_days() {
        assert!(Cli::try_parse_from(["valma", "page", "streak", "-3"]).is_err());
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["valma", "--format", "xml", "status"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from([
            "valma",
            "--project",
            "/tmp/site",
            "--students-dir",
            "web/students",
            "status",
        ])
        .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.project.as_deref(), Some("/tmp/site"));
        assert_eq!(flags.students_dir.as_deref(), Some("web/students"));
    }
}
