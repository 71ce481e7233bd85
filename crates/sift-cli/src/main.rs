use clap::Parser;
use std::process::ExitCode;

mod cli;
mod commands;
mod output;

use cli::{Cli, Commands, ConfigCommands};
use commands::{CommandContext, CommandError, ViewOptions};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                let error_json = serde_json::json!({
                    "error": {
                        "code": error_code(&e),
                        "message": e.to_string(),
                    }
                });
                eprintln!("{}", serde_json::to_string_pretty(&error_json).unwrap());
            } else {
                eprintln!("Error: {e}");
            }
            ExitCode::from(error_exit_code(&e))
        }
    }
}

fn run(cli: &Cli) -> commands::Result<()> {
    let ctx = CommandContext::from_cli(cli);

    match &cli.command {
        Some(Commands::View {
            file,
            filter,
            search,
            sort,
            desc,
            limit,
            all,
        }) => {
            let opts = commands::view::ViewCmdOptions {
                file: file.clone(),
                view: ViewOptions {
                    filters: filter.clone(),
                    search: search.clone(),
                    sort: sort.clone(),
                    descending: *desc,
                },
                limit: *limit,
                all: *all,
            };
            commands::view::execute(&ctx, &opts)
        }

        Some(Commands::Export {
            file,
            output,
            filter,
            search,
            sort,
            desc,
            force,
        }) => {
            let opts = commands::export::ExportOptions {
                file: file.clone(),
                output: output.clone(),
                view: ViewOptions {
                    filters: filter.clone(),
                    search: search.clone(),
                    sort: sort.clone(),
                    descending: *desc,
                },
                force: *force,
            };
            commands::export::execute(&ctx, &opts)
        }

        Some(Commands::Stats {
            file,
            filter,
            search,
            output,
        }) => {
            let opts = commands::stats::StatsOptions {
                file: file.clone(),
                view: ViewOptions {
                    filters: filter.clone(),
                    search: search.clone(),
                    sort: None,
                    descending: false,
                },
                output: output.clone(),
            };
            commands::stats::execute(&ctx, &opts)
        }

        Some(Commands::Columns { file }) => commands::columns::execute(&ctx, file),

        Some(Commands::Config { command }) => match command {
            Some(ConfigCommands::Show) | None => commands::config::execute_show(&ctx),
            Some(ConfigCommands::Set { key, value }) => {
                commands::config::execute_set(&ctx, key, value)
            }
            Some(ConfigCommands::Path) => commands::config::execute_path(&ctx),
        },

        Some(Commands::Completions { shell }) => {
            commands::completions::execute(shell).map_err(CommandError::Io)
        }

        None => {
            if !cli.quiet {
                println!("sift - tabular data viewer");
                println!("Use --help for usage information");
            }
            Ok(())
        }
    }
}

/// Returns the error code string for JSON output.
fn error_code(e: &CommandError) -> &'static str {
    match e {
        CommandError::Data(_) => "DATA_ERROR",
        CommandError::UnknownColumn { .. } => "COLUMN_ERROR",
        CommandError::BadFilterArgument { .. } => "FILTER_ERROR",
        CommandError::Config(_) => "CONFIG_ERROR",
        CommandError::Io(_) => "IO_ERROR",
        CommandError::Json(_) => "JSON_ERROR",
        CommandError::Csv(_) => "CSV_ERROR",
    }
}

/// Returns the process exit code for an error.
fn error_exit_code(e: &CommandError) -> u8 {
    match e {
        CommandError::UnknownColumn { .. } => 1,
        CommandError::BadFilterArgument { .. } => 1,
        CommandError::Json(_) => 1,
        CommandError::Csv(_) => 1,
        CommandError::Data(_) => 2,
        CommandError::Io(_) => 3,
        CommandError::Config(_) => 5,
    }
}
