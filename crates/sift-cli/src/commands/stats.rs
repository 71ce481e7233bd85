//! Stats command implementation.
//!
//! Computes per-column statistics over the filtered view and renders them
//! as a table, JSON, or a CSV file.

use std::path::{Path, PathBuf};

use sift_view::column_stats;

use super::{build_view, config, CommandContext, Result, ViewOptions};
use crate::output::{format_stats_json, format_stats_table, stats_csv_records, STATS_CSV_HEADER};

/// Options for the stats command.
#[derive(Debug)]
pub struct StatsOptions {
    /// File to load.
    pub file: PathBuf,
    /// Filter/search flags (sort does not change statistics but is
    /// accepted for symmetry).
    pub view: ViewOptions,
    /// Optional CSV destination.
    pub output: Option<PathBuf>,
}

/// Executes the stats command.
///
/// # Errors
///
/// Returns an error if the file cannot be loaded, a flag names an unknown
/// column, or the CSV destination cannot be written.
pub fn execute(ctx: &CommandContext, opts: &StatsOptions) -> Result<()> {
    let config = config::load_config()?;
    let use_colors = ctx.use_colors && config.output.color.unwrap_or(true);

    let table = sift_data::read::load_path(&opts.file)?;
    let view = build_view(&table, &opts.view)?;
    let stats = column_stats(&table, view.visible_rows());

    if let Some(path) = &opts.output {
        write_stats_csv(path, &stats)?;
        if !ctx.quiet && !ctx.json_output {
            println!("Wrote statistics to {}", path.display());
        }
    }

    if ctx.json_output {
        println!("{}", format_stats_json(&stats)?);
    } else if !ctx.quiet {
        print!("{}", format_stats_table(&stats, use_colors));
    }

    Ok(())
}

fn write_stats_csv(path: &Path, stats: &[sift_view::ColumnStats]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(STATS_CSV_HEADER)?;
    for record in stats_csv_records(stats) {
        writer.write_record(&record)?;
    }
    writer.flush()?;
    Ok(())
}
