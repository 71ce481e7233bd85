//! Export command implementation.
//!
//! Writes the filtered, sorted view to a new file; the format follows the
//! output extension. The export itself is a plain dump of the visible
//! rows - all filtering has already happened in the view.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use dialoguer::Confirm;

use super::{build_view, CommandContext, CommandError, Result, ViewOptions};

/// Options for the export command.
#[derive(Debug)]
pub struct ExportOptions {
    /// File to load.
    pub file: PathBuf,
    /// Output path; the extension picks the format.
    pub output: PathBuf,
    /// Filter/search/sort flags.
    pub view: ViewOptions,
    /// Overwrite without asking.
    pub force: bool,
}

/// Executes the export command.
///
/// # Errors
///
/// Returns an error if the input cannot be loaded, a flag names an unknown
/// column, or the output cannot be written.
pub fn execute(ctx: &CommandContext, opts: &ExportOptions) -> Result<()> {
    let table = sift_data::read::load_path(&opts.file)?;
    let view = build_view(&table, &opts.view)?;

    if opts.output.exists() && !opts.force && !confirm_overwrite(&opts.output)? {
        if !ctx.quiet {
            println!("Export cancelled.");
        }
        return Ok(());
    }

    sift_data::write::export_path(&opts.output, &table, view.visible_rows())?;

    if ctx.json_output {
        println!(
            "{}",
            serde_json::json!({
                "exported": view.visible_len(),
                "total": view.total_len(),
                "path": opts.output.display().to_string(),
            })
        );
    } else if !ctx.quiet {
        println!(
            "Exported {} of {} rows to {}",
            view.visible_len(),
            view.total_len(),
            opts.output.display()
        );
    }

    Ok(())
}

/// Asks before clobbering an existing output file. Refuses outright when
/// there is no terminal to ask on.
fn confirm_overwrite(path: &std::path::Path) -> Result<bool> {
    if !io::stdin().is_terminal() {
        return Err(CommandError::Config(format!(
            "{} already exists; pass --force to overwrite",
            path.display()
        )));
    }

    Confirm::new()
        .with_prompt(format!("Overwrite {}?", path.display()))
        .default(false)
        .interact()
        .map_err(|e| CommandError::Io(io::Error::other(e.to_string())))
}
