use tracing::{debug, info};

use super::{ConfigLocation, FileConfig, CONFIG_ENV_KEY};

pub fn log_location(location: Option<&ConfigLocation>) {
    match location {
        Some(ConfigLocation::Explicit(path)) => info!(
            target: "nvr::config",
            path = %path.display(),
            "Loading explicitly requested configuration file"
        ),
        Some(ConfigLocation::Default(path)) => debug!(
            target: "nvr::config",
            path = %path.display(),
            env = CONFIG_ENV_KEY,
            "No explicit configuration requested; checking default location"
        ),
        None => debug!(
            target: "nvr::config",
            "No configuration location available; using built-in defaults"
        ),
    }
}

pub fn log_loaded(config: &FileConfig) {
    info!(
        target: "nvr::config",
        path = %config
            .source_path
            .as_ref()
            .map(|path| path.display().to_string())
            .unwrap_or_default(),
        editor = config.editor.as_deref().unwrap_or(""),
        client = config.client.as_deref().unwrap_or(""),
        no_start = config.no_start,
        "Configuration file loaded successfully"
    );
}
