//! Command implementations for the sift CLI.
//!
//! This module contains the command handlers invoked from `main`, plus the
//! shared machinery for turning `--filter`/`--search`/`--sort` flags into a
//! configured [`TableView`].

pub mod columns;
pub mod completions;
pub mod config;
pub mod export;
pub mod stats;
pub mod view;

use sift_data::Table;
use sift_view::{SortOrder, TableView};

use crate::cli::Cli;

/// Error type for command execution.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// File loading or export error.
    #[error("data error: {0}")]
    Data(#[from] sift_data::DataError),

    /// A column name that does not exist in the loaded file.
    #[error("{message}")]
    UnknownColumn {
        /// Preformatted message, optionally with a suggestion.
        message: String,
    },

    /// A `--filter` argument that is not of the form `COLUMN=EXPR`.
    #[error("invalid filter argument '{argument}' (expected COLUMN=EXPR)")]
    BadFilterArgument {
        /// The argument as given.
        argument: String,
    },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV writing error (statistics export).
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type for command execution.
pub type Result<T> = std::result::Result<T, CommandError>;

/// Context for command execution, containing common dependencies.
pub struct CommandContext {
    /// Whether to output JSON.
    pub json_output: bool,
    /// Whether to use colors.
    pub use_colors: bool,
    /// Whether to be quiet (errors only).
    pub quiet: bool,
    /// Whether to be verbose.
    pub verbose: bool,
}

impl CommandContext {
    /// Creates a new command context from CLI arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            json_output: cli.json,
            use_colors: !cli.no_color,
            quiet: cli.quiet,
            verbose: cli.verbose,
        }
    }
}

/// The filter/search/sort flags shared by `view`, `export`, and `stats`.
#[derive(Debug, Default)]
pub struct ViewOptions {
    /// `--filter COLUMN=EXPR` arguments, in order.
    pub filters: Vec<String>,
    /// `--search` text.
    pub search: Option<String>,
    /// `--sort` column name.
    pub sort: Option<String>,
    /// `--desc` flag.
    pub descending: bool,
}

/// Builds a [`TableView`] over `table` with the given options applied.
///
/// # Errors
///
/// Returns an error for a malformed `--filter` argument or a column name
/// that does not exist (with a "did you mean" suggestion when a header is
/// close).
pub fn build_view<'a>(table: &'a Table, opts: &ViewOptions) -> Result<TableView<'a>> {
    let mut view = TableView::new(table);

    for argument in &opts.filters {
        let (name, expression) = split_filter_argument(argument)?;
        let column = resolve_column(table, name)?;
        view.set_column_filter(column, expression);
    }

    if let Some(search) = &opts.search {
        view.set_global_search(search);
    }

    if let Some(sort) = &opts.sort {
        let column = resolve_column(table, sort)?;
        let order = if opts.descending {
            SortOrder::Descending
        } else {
            SortOrder::Ascending
        };
        view.set_sort(column, order);
    }

    Ok(view)
}

/// Splits a `--filter` argument at the first `=` into column name and
/// filter expression. Later `=` characters belong to the expression.
pub fn split_filter_argument(argument: &str) -> Result<(&str, &str)> {
    let Some((name, expression)) = argument.split_once('=') else {
        return Err(CommandError::BadFilterArgument {
            argument: argument.to_string(),
        });
    };

    let name = name.trim();
    if name.is_empty() {
        return Err(CommandError::BadFilterArgument {
            argument: argument.to_string(),
        });
    }

    Ok((name, expression))
}

/// Resolves a column name against the table headers (case-insensitive),
/// suggesting a close header name when the lookup fails.
pub fn resolve_column(table: &Table, name: &str) -> Result<usize> {
    table.column_index(name).ok_or_else(|| {
        let base = format!("column '{name}' not found");
        let message = match table.similar_column(name) {
            Some(suggestion) => format!("{base}. Did you mean '{suggestion}'?"),
            None => base,
        };
        CommandError::UnknownColumn { message }
    })
}
