use std::{
    fs,
    path::{Path, PathBuf},
};

pub use cellgauge_proto::config::*;

use log::{info, warn};
use shellexpand::full;

mod error;

pub use error::ConfigError;

/// Resolves and loads the configuration.
///
/// An explicit `path` must exist. Without one the default location is used
/// and a missing file simply means defaults. A file that exists but cannot
/// be read, parsed or validated is logged and replaced by defaults, so a bad
/// edit never keeps the demo from starting.
///
/// # Errors
///
/// Returns [`ConfigError::Expand`] when the path cannot be expanded and
/// [`ConfigError::NotFound`] when an explicitly requested file is missing.
pub fn get_config(path: Option<PathBuf>) -> Result<(Config, PathBuf), ConfigError> {
    match path {
        Some(path) => {
            info!("Config path provided {path:?}");
            let expanded = expand_path(&path)?;

            if !expanded.exists() {
                return Err(ConfigError::NotFound { path: expanded });
            }

            Ok((load_or_default(&expanded), expanded))
        }
        None => {
            let expanded = expand_path(Path::new(DEFAULT_CONFIG_FILE_PATH))?;

            if !expanded.exists() {
                info!("No config at {expanded:?}, using defaults");
                return Ok((Config::default(), expanded));
            }

            Ok((load_or_default(&expanded), expanded))
        }
    }
}

fn load_or_default(path: &Path) -> Config {
    read_config(path).unwrap_or_else(|err| {
        warn!("{err}, falling back to defaults");
        Config::default()
    })
}

fn expand_path(path: &Path) -> Result<PathBuf, ConfigError> {
    let str_path = path.to_string_lossy();
    let expanded = full(&str_path).map_err(|err| ConfigError::Expand {
        path:   path.to_path_buf(),
        reason: err.to_string(),
    })?;

    Ok(PathBuf::from(expanded.into_owned()))
}

/// Reads, decodes and validates the config file at `path`.
///
/// # Errors
///
/// Returns [`ConfigError::Read`], [`ConfigError::Parse`] or
/// [`ConfigError::Invalid`] depending on which stage failed.
pub fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Decoding config file {path:?}");

    let config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    config.validate()?;

    info!("Config file loaded successfully");
    Ok(config)
}
