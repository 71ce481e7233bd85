//! Columns command implementation.
//!
//! Lists the column names of a file with their ordinals, so users know
//! what `--filter` and `--sort` can name.

use std::path::Path;

use super::{CommandContext, Result};

/// Executes the columns command.
///
/// # Errors
///
/// Returns an error if the file cannot be loaded.
pub fn execute(ctx: &CommandContext, file: &Path) -> Result<()> {
    let table = sift_data::read::load_path(file)?;

    if ctx.json_output {
        println!("{}", serde_json::to_string_pretty(table.headers())?);
    } else if !ctx.quiet {
        if table.headers().is_empty() {
            println!("No columns found.");
        } else {
            for (ordinal, name) in table.headers().iter().enumerate() {
                println!("{ordinal:>4}  {name}");
            }
        }
    }

    Ok(())
}
