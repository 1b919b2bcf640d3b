use std::{io, path::PathBuf, process::ExitCode};

use config::ConfigError as ConfigLoaderError;
use thiserror::Error;

/// Exit status for an unresolved server name or an invalid configuration.
pub const EXIT_CONFIGURATION: u8 = 1;
/// Exit status when no server answered and starting one was disallowed.
pub const EXIT_SERVER_UNAVAILABLE: u8 = 2;
/// Exit status when a file argument could not be resolved.
pub const EXIT_PATH_RESOLUTION: u8 = 3;
/// Exit status when the final command could not be spawned.
pub const EXIT_EXECUTION: u8 = 4;
/// Exit status for malformed command-line usage (`EX_USAGE`).
pub const EXIT_USAGE: u8 = 64;

/// Errors that can occur while loading or validating the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Explicitly requested config file does not exist.
    #[error("Configuration file {path} does not exist")]
    NotFound { path: PathBuf },
    /// Failed to build (read) the configuration file.
    #[error("Failed to read configuration file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Failed to deserialize TOML into a struct.
    #[error("Failed to parse configuration file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Field failed validation.
    #[error("Configuration file {path} has invalid `{field}`: {message}")]
    InvalidField {
        path: PathBuf,
        field: &'static str,
        message: String,
    },
}

impl ConfigError {
    /// Helper to wrap `config::ConfigError` as a read failure.
    pub fn from_read_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::FileRead { path, source }
    }

    /// Helper to wrap `config::ConfigError` as a parse failure.
    pub fn from_parse_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::Parse { path, source }
    }
}

/// Fatal failures of a launch. Every variant ends the run.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("unable to find server name: pass --server-name or set {env}")]
    MissingServerName { env: &'static str },
    #[error("invalid option `{option}`: {message}")]
    InvalidOption {
        option: &'static str,
        message: String,
    },
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("unable to locate server {server_name}")]
    ServerUnavailable { server_name: String },
    #[error("failed to resolve path `{argument}`: {source}")]
    PathResolution {
        argument: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to execute `{program}`: {source}")]
    Execution {
        program: String,
        #[source]
        source: io::Error,
    },
}

impl LaunchError {
    /// Raw exit status associated with this failure.
    pub const fn exit_code_value(&self) -> u8 {
        match self {
            LaunchError::MissingServerName { .. }
            | LaunchError::InvalidOption { .. }
            | LaunchError::Config(_) => EXIT_CONFIGURATION,
            LaunchError::ServerUnavailable { .. } => EXIT_SERVER_UNAVAILABLE,
            LaunchError::PathResolution { .. } => EXIT_PATH_RESOLUTION,
            LaunchError::Execution { .. } => EXIT_EXECUTION,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_code_value())
    }

    /// Short machine-readable label used in log events.
    pub const fn kind(&self) -> &'static str {
        match self {
            LaunchError::MissingServerName { .. }
            | LaunchError::InvalidOption { .. }
            | LaunchError::Config(_) => "configuration",
            LaunchError::ServerUnavailable { .. } => "server_unavailable",
            LaunchError::PathResolution { .. } => "path_resolution",
            LaunchError::Execution { .. } => "execution",
        }
    }
}
