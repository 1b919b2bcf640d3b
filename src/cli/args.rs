//! CLI argument definitions and `LaunchProfile` construction.
use std::path::PathBuf;

use clap::{ArgAction, Parser};

use super::LaunchProfile;
use crate::{config::FileConfig, lib::errors::LaunchError, lib::nvim::DEFAULT_NVIM_BINARY};

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "nvr",
    author,
    version,
    about = "Open files in a running Neovim server, starting one if needed",
    long_about = None
)]
pub struct LaunchProfileArgs {
    /// Print debug information (repeat for more).
    #[arg(short = 'd', long = "debug", action = ArgAction::Count)]
    pub debug: u8,
    /// Remote server name to connect to (overrides NVIM_LISTEN_ADDRESS).
    #[arg(long = "server-name", value_name = "NAME")]
    pub server_name: Option<String>,
    /// Do not start a new instance if no server is found.
    #[arg(long, default_value_t = false)]
    pub no_start: bool,
    /// Editor command used to start a new instance [default: nvim].
    #[arg(long, value_name = "COMMAND")]
    pub editor: Option<String>,
    /// Binary used to probe and attach to a running server [default: nvim].
    #[arg(long, value_name = "BINARY")]
    pub client: Option<String>,
    /// Path to config.toml (overrides NVR_CONFIG_PATH).
    #[arg(long = "config", value_name = "PATH")]
    pub config_override: Option<PathBuf>,
    /// Print the resolved command as JSON instead of running it.
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
    /// Files to open; `+` arguments are passed through as editor commands.
    #[arg(value_name = "FILE")]
    pub files: Vec<String>,
}

impl LaunchProfileArgs {
    /// Merge CLI args over config file defaults into a `LaunchProfile`.
    pub fn build(self, file: FileConfig) -> Result<LaunchProfile, LaunchError> {
        let editor = pick_command("--editor", self.editor, file.editor)?;
        let client = pick_command("--client", self.client, file.client)?;

        Ok(LaunchProfile {
            verbosity: self.debug,
            server_name: self.server_name,
            no_start: self.no_start || file.no_start,
            editor,
            client,
            dry_run: self.dry_run,
            files: self.files,
            config_path: file.source_path,
        })
    }
}

fn pick_command(
    option: &'static str,
    cli: Option<String>,
    file: Option<String>,
) -> Result<String, LaunchError> {
    let value = cli
        .or(file)
        .unwrap_or_else(|| DEFAULT_NVIM_BINARY.to_string());
    if value.trim().is_empty() {
        return Err(LaunchError::InvalidOption {
            option,
            message: "command must not be empty".into(),
        });
    }
    Ok(value)
}
