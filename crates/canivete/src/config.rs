use crate::prelude::*;
use canivete_core::config::{parse_config, Config};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "config.toml";

/// Default location of the configuration file, e.g. `~/.config/canivete/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs_next::config_dir().map(|dir| dir.join("canivete").join(CONFIG_FILE_NAME))
}

/// Load the configuration
///
/// An explicit path must exist. Without one, the default location is used when
/// present and built-in defaults otherwise.
pub fn load(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        return read_config(path);
    }

    match default_config_path() {
        Some(path) if path.is_file() => read_config(&path),
        _ => {
            log::debug!("No configuration file found, using defaults");
            Ok(Config::default())
        }
    }
}

fn read_config(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| f!("Failed to read configuration file {}", path.display()))?;

    let config = parse_config(&contents).map_err(|message| Error::Config {
        path: path.display().to_string(),
        message,
    })?;

    log::debug!("Using config file: {}", path.display());

    Ok(config)
}
