//! Configuration loading

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{ConfigError, Result};

use super::defaults::config_file_names;
use super::types::{Config, ConfigOverrides};
use super::validation::validate_config;

/// Parse a configuration file into an overrides layer.
///
/// Files ending in `.toml` are read as TOML, everything else as YAML.
pub fn load_config_file(path: &Path) -> Result<ConfigOverrides> {
    let format = if path.extension().is_some_and(|e| e == "toml") {
        "TOML"
    } else {
        "YAML"
    };
    info!(path = %path.display(), format, "loading config");

    let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
    if content.trim().is_empty() {
        return Ok(ConfigOverrides::default());
    }

    let layer: ConfigOverrides = if format == "TOML" {
        toml::from_str(&content).map_err(ConfigError::TomlError)?
    } else {
        serde_yaml::from_str(&content).map_err(ConfigError::YamlError)?
    };

    debug!(path = %path.display(), "config file parsed");
    Ok(layer)
}

/// Find configuration file in directory or parent directories.
///
/// At each directory level the search checks:
///   1. `<dir>/<name>`          (e.g. `logsmith.toml`)
///   2. `<dir>/.github/<name>`  (e.g. `.github/logsmith.toml`)
///
/// The first match wins. Parents are walked until the filesystem root.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    debug!(start_dir = %start_dir.display(), "searching for config file");
    let mut current = std::path::absolute(start_dir).unwrap_or_else(|_| start_dir.to_path_buf());

    loop {
        for name in config_file_names() {
            let config_path = current.join(name);
            if config_path.is_file() {
                info!(path = %config_path.display(), "found config file");
                return Some(config_path);
            }

            let github_path = current.join(".github").join(name);
            if github_path.is_file() {
                info!(path = %github_path.display(), "found config file in .github/");
                return Some(github_path);
            }
        }

        if !current.pop() {
            break;
        }
    }

    debug!("no config file found");
    None
}

/// Build the effective configuration.
///
/// Layers defaults, then the discovered configuration file (searched from
/// the override `dir`, or the current directory), then `overrides`. The
/// result is validated before it is returned along with the file used.
pub fn load_config(overrides: ConfigOverrides) -> Result<(Config, Option<PathBuf>)> {
    let search_dir = overrides
        .dir
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));

    let mut config = Config::default();
    let config_path = find_config(&search_dir);
    if let Some(path) = &config_path {
        config.apply(load_config_file(path)?);
    }
    config.apply(overrides);

    validate_config(&config)?;
    debug!(
        format = %config.format,
        language = %config.language,
        theme = %config.theme,
        "effective configuration resolved"
    );
    Ok((config, config_path))
}
