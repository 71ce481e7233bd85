//! CLI argument parsing using clap derive macros.
//!
//! This module defines the command-line interface for the sift CLI.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// sift - view, filter, and export tabular data files
#[derive(Parser, Debug)]
#[command(name = "sift")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbose output (show debug information)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Force JSON output
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colors in output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// View a tabular file with filters applied
    #[command(alias = "v")]
    View {
        /// File to view (csv, tsv, txt, json)
        file: PathBuf,

        /// Column filter as "COLUMN=EXPR" (repeatable; e.g. "age=#range: 18,65")
        #[arg(short, long = "filter", value_name = "COLUMN=EXPR", action = clap::ArgAction::Append)]
        filter: Vec<String>,

        /// Search across all columns
        #[arg(short, long)]
        search: Option<String>,

        /// Sort by column name
        #[arg(long, value_name = "COLUMN")]
        sort: Option<String>,

        /// Sort descending
        #[arg(long, requires = "sort")]
        desc: bool,

        /// Limit displayed rows (default: 50, or view.default_limit from config)
        #[arg(long)]
        limit: Option<u32>,

        /// Show all rows (no limit)
        #[arg(long, conflicts_with = "limit")]
        all: bool,
    },

    /// Export the filtered view to a file
    #[command(alias = "e")]
    Export {
        /// File to read (csv, tsv, txt, json)
        file: PathBuf,

        /// Output path; format follows the extension (csv, tsv, json)
        #[arg(short, long)]
        output: PathBuf,

        /// Column filter as "COLUMN=EXPR" (repeatable)
        #[arg(short, long = "filter", value_name = "COLUMN=EXPR", action = clap::ArgAction::Append)]
        filter: Vec<String>,

        /// Search across all columns
        #[arg(short, long)]
        search: Option<String>,

        /// Sort by column name
        #[arg(long, value_name = "COLUMN")]
        sort: Option<String>,

        /// Sort descending
        #[arg(long, requires = "sort")]
        desc: bool,

        /// Overwrite the output file without asking
        #[arg(long)]
        force: bool,
    },

    /// Per-column statistics for the filtered view
    Stats {
        /// File to read (csv, tsv, txt, json)
        file: PathBuf,

        /// Column filter as "COLUMN=EXPR" (repeatable)
        #[arg(short, long = "filter", value_name = "COLUMN=EXPR", action = clap::ArgAction::Append)]
        filter: Vec<String>,

        /// Search across all columns
        #[arg(short, long)]
        search: Option<String>,

        /// Write the statistics as CSV to this path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the column names of a file
    Columns {
        /// File to read (csv, tsv, txt, json)
        file: PathBuf,
    },

    /// View or manage configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Set a configuration value (e.g. "view.default_limit" "100")
    Set {
        /// Configuration key
        key: String,
        /// Value to set
        value: String,
    },
    /// Show the config file path
    Path,
}

/// Supported shells for completions
#[derive(ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_view_alias() {
        let cli = Cli::try_parse_from(["sift", "v", "data.csv"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::View { .. })));
    }

    #[test]
    fn test_view_repeatable_filters() {
        let cli = Cli::try_parse_from([
            "sift",
            "view",
            "data.csv",
            "-f",
            "age=#range: 18,65",
            "-f",
            "city=oslo",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::View { filter, .. }) => {
                assert_eq!(filter, ["age=#range: 18,65", "city=oslo"]);
            }
            other => panic!("expected view command, got {other:?}"),
        }
    }

    #[test]
    fn test_desc_requires_sort() {
        assert!(Cli::try_parse_from(["sift", "view", "data.csv", "--desc"]).is_err());
        assert!(
            Cli::try_parse_from(["sift", "view", "data.csv", "--sort", "age", "--desc"]).is_ok()
        );
    }

    #[test]
    fn test_all_conflicts_with_limit() {
        assert!(
            Cli::try_parse_from(["sift", "view", "data.csv", "--all", "--limit", "10"]).is_err()
        );
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["sift", "-q", "-v", "columns", "data.csv"]).is_err());
    }
}
