//! Error types for the dashboard core.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the dashboard facade and its configuration.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The dataset store can only be attached once.
    #[error("a dataset store is already attached")]
    StoreAlreadyAttached,

    /// Failed to read the configuration file.
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for [`crate::DashboardConfig`].
    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
