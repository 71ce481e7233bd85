//! Config command implementation.
//!
//! View and manage configuration settings.
//! Config file is located at ~/.config/sift/config.toml.

use std::env;
use std::fs;
use std::path::PathBuf;

use directories::BaseDirs;
use serde::{Deserialize, Serialize};

use super::{CommandContext, CommandError, Result};

/// Current config file version. Increment when making breaking changes to schema.
const CONFIG_VERSION: u32 = 1;

/// Default config file contents.
const DEFAULT_CONFIG: &str = r#"# sift - tabular data viewer configuration
# https://github.com/siftview/sift-rs

# Config schema version (do not modify)
version = 1

# Output preferences
[output]
# color = true             # Enable colors (respects --no-color)

# View preferences
[view]
# default_limit = 50       # Rows shown by `sift view` without --limit/--all
# max_col_width = 40       # Widest a rendered column may grow
"#;

/// Configuration file structure.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Config schema version for migrations.
    /// Defaults to current version when not present in file.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,

    /// View settings.
    #[serde(default)]
    pub view: ViewConfig,
}

/// Returns the current config version (used by serde default).
fn default_version() -> u32 {
    CONFIG_VERSION
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            output: OutputConfig::default(),
            view: ViewConfig::default(),
        }
    }
}

/// Output configuration.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Enable colors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<bool>,
}

/// View configuration.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Rows shown by `sift view` when neither --limit nor --all is given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_limit: Option<u32>,

    /// Widest a rendered column may grow, in characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_col_width: Option<usize>,
}

/// Gets the config directory path.
/// Uses XDG-style paths: ~/.config/sift/ on all platforms.
fn get_config_dir() -> Result<PathBuf> {
    // Check for override env var first
    if let Ok(path) = env::var("SIFT_CONFIG") {
        let path = PathBuf::from(path);
        if let Some(parent) = path.parent() {
            return Ok(parent.to_path_buf());
        }
    }

    // Use XDG_CONFIG_HOME if set, otherwise ~/.config/sift
    if let Ok(xdg_config) = env::var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg_config).join("sift"));
    }

    BaseDirs::new()
        .map(|dirs| dirs.home_dir().join(".config").join("sift"))
        .ok_or_else(|| CommandError::Config("Could not determine config directory".to_string()))
}

/// Gets the config file path.
pub fn get_config_path() -> Result<PathBuf> {
    // Check for override env var first
    if let Ok(path) = env::var("SIFT_CONFIG") {
        return Ok(PathBuf::from(path));
    }

    let config_dir = get_config_dir()?;
    Ok(config_dir.join("config.toml"))
}

/// Loads the configuration from disk.
///
/// A missing file yields the defaults; a file that fails to parse is a
/// configuration error.
pub fn load_config() -> Result<Config> {
    let path = get_config_path()?;

    if !path.exists() {
        return Ok(Config::default());
    }

    let contents = fs::read_to_string(&path)?;
    toml::from_str(&contents)
        .map_err(|e| CommandError::Config(format!("could not parse {}: {e}", path.display())))
}

/// Saves the configuration to disk, creating the directory if needed.
pub fn save_config(config: &Config) -> Result<()> {
    let path = get_config_path()?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let contents = toml::to_string_pretty(config)
        .map_err(|e| CommandError::Config(format!("could not serialize config: {e}")))?;
    fs::write(&path, contents)?;
    Ok(())
}

/// Executes `config show`.
pub fn execute_show(ctx: &CommandContext) -> Result<()> {
    let path = get_config_path()?;
    let config = load_config()?;

    if ctx.json_output {
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else if !ctx.quiet {
        println!("Config file: {}", path.display());
        println!();
        if path.exists() {
            match toml::to_string_pretty(&config) {
                Ok(text) => print!("{text}"),
                Err(e) => return Err(CommandError::Config(e.to_string())),
            }
        } else {
            // Nothing saved yet; show the commented defaults instead.
            print!("{DEFAULT_CONFIG}");
        }
    }

    Ok(())
}

/// Executes `config set KEY VALUE`.
pub fn execute_set(ctx: &CommandContext, key: &str, value: &str) -> Result<()> {
    let mut config = load_config()?;

    match key {
        "output.color" => {
            config.output.color = Some(parse_value(key, value)?);
        }
        "view.default_limit" => {
            config.view.default_limit = Some(parse_value(key, value)?);
        }
        "view.max_col_width" => {
            config.view.max_col_width = Some(parse_value(key, value)?);
        }
        _ => {
            return Err(CommandError::Config(format!(
                "unknown config key '{key}' (known: output.color, view.default_limit, view.max_col_width)"
            )));
        }
    }

    save_config(&config)?;

    if ctx.json_output {
        println!(
            "{}",
            serde_json::json!({ "status": "ok", "key": key, "value": value })
        );
    } else if !ctx.quiet {
        println!("Set {key} = {value}");
    }

    Ok(())
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| CommandError::Config(format!("invalid value '{value}' for '{key}'")))
}

/// Executes `config path`.
pub fn execute_path(ctx: &CommandContext) -> Result<()> {
    let path = get_config_path()?;

    if ctx.json_output {
        println!("{}", serde_json::json!({ "path": path.display().to_string() }));
    } else if !ctx.quiet {
        println!("{}", path.display());
    }

    Ok(())
}
