//! Load and validate the optional `config.toml` holding launch defaults.
use std::{
    env,
    ffi::OsString,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::{error, info};

use crate::lib::errors::ConfigError;

pub mod telemetry;

/// Environment variable pointing at an explicit config file.
pub const CONFIG_ENV_KEY: &str = "NVR_CONFIG_PATH";
const XDG_CONFIG_HOME_ENV: &str = "XDG_CONFIG_HOME";
const HOME_ENV: &str = "HOME";
const CONFIG_DIR_NAME: &str = "nvr";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Where the config file was looked up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigLocation {
    /// Requested through `--config` or `NVR_CONFIG_PATH`; must exist.
    Explicit(PathBuf),
    /// Conventional per-user location; may be absent.
    Default(PathBuf),
}

impl ConfigLocation {
    pub fn path(&self) -> &Path {
        match self {
            ConfigLocation::Explicit(path) | ConfigLocation::Default(path) => path,
        }
    }
}

/// Launch defaults read from the config file. Unset fields fall back to
/// built-in defaults or CLI flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileConfig {
    pub editor: Option<String>,
    pub client: Option<String>,
    pub no_start: bool,
    pub source_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct RawFileConfig {
    editor: Option<String>,
    client: Option<String>,
    no_start: Option<bool>,
}

impl FileConfig {
    /// Locate and load the config file, honoring `--config` and `NVR_CONFIG_PATH`.
    pub fn load(override_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let location = resolve_config_location_from(
            override_path,
            env::var_os(CONFIG_ENV_KEY),
            env::var_os(XDG_CONFIG_HOME_ENV),
            env::var_os(HOME_ENV),
        );
        telemetry::log_location(location.as_ref());
        Self::load_location(location)
    }

    fn load_location(location: Option<ConfigLocation>) -> Result<Self, ConfigError> {
        match location {
            None => Ok(Self::default()),
            Some(ConfigLocation::Default(path)) if !path.is_file() => Ok(Self::default()),
            Some(ConfigLocation::Explicit(path)) if !path.is_file() => {
                let error = ConfigError::NotFound { path: path.clone() };
                error!(
                    target: "nvr::config",
                    path = %path.display(),
                    reason = %error,
                    "Configuration file is missing"
                );
                Err(error)
            }
            Some(location) => Self::load_from_path(location.path().to_path_buf()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: PathBuf) -> Result<Self, ConfigError> {
        info!(
            target: "nvr::config",
            path = %path.display(),
            "Starting configuration load"
        );

        let builder = config::Config::builder()
            .add_source(config::File::from(path.as_path()).format(config::FileFormat::Toml));
        let document = builder.build().map_err(|err| {
            let error = ConfigError::from_read_error(path.clone(), err);
            error!(
                target: "nvr::config",
                path = %path.display(),
                reason = %error,
                "Failed to read configuration file"
            );
            error
        })?;

        let raw: RawFileConfig = document.try_deserialize().map_err(|err| {
            let error = ConfigError::from_parse_error(path.clone(), err);
            error!(
                target: "nvr::config",
                path = %path.display(),
                reason = %error,
                "Failed to parse configuration file"
            );
            error
        })?;

        let config = Self::from_raw(raw, path.clone()).map_err(|err| {
            error!(
                target: "nvr::config",
                path = %path.display(),
                reason = %err,
                "Failed to validate configuration file"
            );
            err
        })?;

        telemetry::log_loaded(&config);
        Ok(config)
    }

    fn from_raw(raw: RawFileConfig, path: PathBuf) -> Result<Self, ConfigError> {
        let editor = validate_command_field(raw.editor, "editor", &path)?;
        let client = validate_command_field(raw.client, "client", &path)?;

        Ok(Self {
            editor,
            client,
            no_start: raw.no_start.unwrap_or(false),
            source_path: Some(path),
        })
    }
}

/// Resolve the config location in the order:
/// `--config` → `NVR_CONFIG_PATH` → `$XDG_CONFIG_HOME/nvr` → `$HOME/.config/nvr`.
fn resolve_config_location_from(
    override_path: Option<PathBuf>,
    env_path: Option<OsString>,
    xdg_config_home: Option<OsString>,
    home: Option<OsString>,
) -> Option<ConfigLocation> {
    if let Some(path) = override_path {
        return Some(ConfigLocation::Explicit(path));
    }

    if let Some(path) = non_empty(env_path) {
        return Some(ConfigLocation::Explicit(PathBuf::from(path)));
    }

    if let Some(dir) = non_empty(xdg_config_home) {
        return Some(ConfigLocation::Default(
            PathBuf::from(dir)
                .join(CONFIG_DIR_NAME)
                .join(CONFIG_FILE_NAME),
        ));
    }

    non_empty(home).map(|home| {
        ConfigLocation::Default(
            PathBuf::from(home)
                .join(".config")
                .join(CONFIG_DIR_NAME)
                .join(CONFIG_FILE_NAME),
        )
    })
}

fn non_empty(value: Option<OsString>) -> Option<OsString> {
    value.filter(|value| !value.is_empty())
}

fn validate_command_field(
    value: Option<String>,
    field: &'static str,
    path: &Path,
) -> Result<Option<String>, ConfigError> {
    match value {
        Some(value) if value.trim().is_empty() => Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field,
            message: "must not be empty".into(),
        }),
        other => Ok(other),
    }
}
