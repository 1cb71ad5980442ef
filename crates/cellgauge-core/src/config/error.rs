use std::path::PathBuf;

use masterror::Error;

use super::ConfigValidationError;

/// Failures while locating or loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The path contains variables or `~` that could not be expanded.
    #[error("failed to expand config path {path:?}: {reason}")]
    Expand { path: PathBuf, reason: String },

    /// An explicitly requested config file does not exist.
    #[error("config file does not exist: {path:?}")]
    NotFound { path: PathBuf },

    /// The file exists but could not be read.
    #[error("failed to read config file {path:?}: {source}")]
    Read {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML or does not match the schema.
    #[error("failed to parse config file {path:?}: {source}")]
    Parse {
        path:   PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// The file parsed but holds values the widgets cannot use.
    #[error("invalid config: {0}")]
    Invalid(#[from] ConfigValidationError),
}
