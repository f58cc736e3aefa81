//! Error types for auto-mapping configuration and convention registration
//!
//! The mapping pass itself never fails; these errors come from loading
//! configuration and from setting up convention registries.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while configuring auto-mapping
#[derive(Error, Debug)]
pub enum AutomapError {
    /// Failed to read configuration file
    #[error("Failed to read configuration file: {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ConfigParse(String),

    /// Configuration file extension not recognised
    #[error("Unsupported configuration format: {0}")]
    UnsupportedConfigFormat(String),

    /// A convention with the same name is already registered
    #[error("Convention already registered: {0}")]
    DuplicateConvention(String),

    /// The process-wide registry can only be installed once
    #[error("Global convention registry is already installed")]
    GlobalRegistryInstalled,

    /// JSON configuration error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<serde_yaml::Error> for AutomapError {
    fn from(e: serde_yaml::Error) -> Self {
        AutomapError::ConfigParse(e.to_string())
    }
}

impl From<toml::de::Error> for AutomapError {
    fn from(e: toml::de::Error) -> Self {
        AutomapError::ConfigParse(e.to_string())
    }
}

/// Result type for auto-mapping setup operations
pub type AutomapResult<T> = Result<T, AutomapError>;
