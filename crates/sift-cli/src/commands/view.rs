//! View command implementation.
//!
//! Loads a tabular file, applies the requested filters, search, and sort,
//! and renders the visible rows.

use std::path::PathBuf;

use owo_colors::OwoColorize;

use super::{build_view, config, CommandContext, Result, ViewOptions};
use crate::output::helpers::format_row_count;
use crate::output::{format_view_json, format_view_table};

/// Rows shown when neither `--limit`, `--all`, nor a config default is set.
pub const DEFAULT_LIMIT: u32 = 50;

/// Column width cap when the config does not set one.
pub const DEFAULT_MAX_COL_WIDTH: usize = 40;

/// Options for the view command.
#[derive(Debug)]
pub struct ViewCmdOptions {
    /// File to load.
    pub file: PathBuf,
    /// Filter/search/sort flags.
    pub view: ViewOptions,
    /// Row limit override.
    pub limit: Option<u32>,
    /// Show all rows.
    pub all: bool,
}

/// Executes the view command.
///
/// # Errors
///
/// Returns an error if the file cannot be loaded or a flag names an
/// unknown column.
pub fn execute(ctx: &CommandContext, opts: &ViewCmdOptions) -> Result<()> {
    let config = config::load_config()?;
    let use_colors = ctx.use_colors && config.output.color.unwrap_or(true);

    let table = sift_data::read::load_path(&opts.file)?;
    if ctx.verbose {
        eprintln!(
            "Loaded {} rows, {} columns from {}",
            table.row_count(),
            table.column_count(),
            opts.file.display()
        );
    }

    let view = build_view(&table, &opts.view)?;
    let visible = view.visible_rows();

    let limit = if opts.all {
        None
    } else {
        Some(opts.limit.or(config.view.default_limit).unwrap_or(DEFAULT_LIMIT) as usize)
    };
    let shown = match limit {
        Some(limit) if visible.len() > limit => &visible[..limit],
        _ => visible,
    };

    if ctx.json_output {
        let output = format_view_json(&table, shown, visible.len(), table.row_count())?;
        println!("{output}");
    } else if !ctx.quiet {
        let max_col_width = config.view.max_col_width.unwrap_or(DEFAULT_MAX_COL_WIDTH);
        print!(
            "{}",
            format_view_table(&table, shown, use_colors, max_col_width)
        );

        let cut_off = (shown.len() < visible.len()).then_some(shown.len());
        let trailer = format_row_count(visible.len(), table.row_count(), cut_off);
        if use_colors {
            println!("{}", trailer.dimmed());
        } else {
            println!("{trailer}");
        }
    }

    Ok(())
}
