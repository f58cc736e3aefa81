//! Configuration for column auto-mapping

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AutomapError, AutomapResult};

/// Configuration for column auto-mapping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AutomapConfig {
    /// Property names that are never auto-mapped
    pub ignored_properties: BTreeSet<String>,
    /// Run property conventions once a class hierarchy has been mapped
    pub apply_conventions: bool,
    /// Let a matching user-type convention map read-only properties
    pub map_read_only_user_types: bool,
}

impl Default for AutomapConfig {
    fn default() -> Self {
        Self {
            ignored_properties: BTreeSet::new(),
            apply_conventions: true,
            map_read_only_user_types: true,
        }
    }
}

impl AutomapConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Never map a property with this name
    pub fn with_ignored_property(mut self, name: impl Into<String>) -> Self {
        self.ignored_properties.insert(name.into());
        self
    }

    /// Enable/disable the convention pass that ends `map_hierarchy`
    pub fn with_apply_conventions(mut self, enabled: bool) -> Self {
        self.apply_conventions = enabled;
        self
    }

    /// Enable/disable mapping read-only properties through user types
    pub fn with_map_read_only_user_types(mut self, enabled: bool) -> Self {
        self.map_read_only_user_types = enabled;
        self
    }

    pub fn is_ignored(&self, property_name: &str) -> bool {
        self.ignored_properties.contains(property_name)
    }

    pub fn from_json_str(content: &str) -> AutomapResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_yaml_str(content: &str) -> AutomapResult<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn from_toml_str(content: &str) -> AutomapResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load a config file, picking the parser from the file extension
    pub fn from_file(path: impl AsRef<Path>) -> AutomapResult<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        let content = std::fs::read_to_string(path).map_err(|source| AutomapError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        let config = match extension.as_str() {
            "json" => Self::from_json_str(&content)?,
            "yaml" | "yml" => Self::from_yaml_str(&content)?,
            "toml" => Self::from_toml_str(&content)?,
            other => return Err(AutomapError::UnsupportedConfigFormat(other.to_string())),
        };
        tracing::debug!(path = %path.display(), "Loaded automap configuration");
        Ok(config)
    }
}
