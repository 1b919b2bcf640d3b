//! LaunchProfile and server name resolution.
use std::{fmt, path::PathBuf};

use crate::lib::errors::LaunchError;

/// Environment variable holding the default server name.
pub const SERVER_NAME_ENV: &str = "NVIM_LISTEN_ADDRESS";

/// Address of a Neovim server: a socket path or `host:port`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerName(String);

impl ServerName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ServerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Source for the server name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerNameSource {
    Cli,
    Env,
}

/// Resolved launch profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchProfile {
    pub verbosity: u8,
    pub server_name: Option<String>,
    pub no_start: bool,
    pub editor: String,
    pub client: String,
    pub dry_run: bool,
    pub files: Vec<String>,
    pub config_path: Option<PathBuf>,
}

/// Resolve the server name in the order: CLI override → `NVIM_LISTEN_ADDRESS` value.
pub fn resolve_server_name(
    server_override: Option<&str>,
    env_value: Option<&str>,
) -> Result<(ServerName, ServerNameSource), LaunchError> {
    if let Some(name) = server_override.and_then(normalize_server_name) {
        return Ok((name, ServerNameSource::Cli));
    }

    if let Some(name) = env_value.and_then(normalize_server_name) {
        return Ok((name, ServerNameSource::Env));
    }

    Err(LaunchError::MissingServerName {
        env: SERVER_NAME_ENV,
    })
}

fn normalize_server_name(raw: &str) -> Option<ServerName> {
    if raw.trim().is_empty() {
        return None;
    }
    Some(ServerName(raw.to_string()))
}
