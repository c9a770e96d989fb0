use std::fs;
use std::path::{Path, PathBuf};

use color_eyre::eyre::eyre;
use tracing::debug;

use crate::config::AppConfig;

const CONFIG_DIR: &str = "enable-secret-version";
const CONFIG_FILE: &str = "config.toml";

pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join(CONFIG_DIR))
}

pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|p| p.join(CONFIG_FILE))
}

/// Load the configuration.
///
/// An explicit `path` must exist. Without one the default location is tried
/// and a missing file means defaults.
pub fn load(path: Option<&Path>) -> color_eyre::Result<AppConfig> {
    if let Some(path) = path {
        if !path.exists() {
            return Err(eyre!("Config file not found: {}", path.display()));
        }
        return load_from(path);
    }

    let Some(path) = config_path() else {
        debug!("No config directory found, using defaults");
        return Ok(AppConfig::default());
    };

    if !path.exists() {
        debug!(path = %path.display(), "Config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_from(&path)
}

pub fn load_from(path: &Path) -> color_eyre::Result<AppConfig> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = toml::from_str(&content)
        .map_err(|e| eyre!("Invalid config file {}: {}", path.display(), e))?;
    debug!(path = %path.display(), "Loaded config");
    Ok(config)
}
