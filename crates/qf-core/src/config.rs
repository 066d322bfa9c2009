//! Host and plugin configuration.
//!
//! The host configuration file carries a `plugins` section keyed by plugin
//! name. The query-files plugin reads its own entry into [`QueryFilesConfig`];
//! everything else in that section belongs to other plugins and is left as
//! raw JSON values.

use crate::error::{CoreError, CoreResult};
use crate::names::DatabaseName;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Default query directory, relative to the working directory.
pub const DEFAULT_QUERY_DIRECTORY: &str = "queries";

/// Configuration for the query-files plugin.
///
/// Keys other than `query_directory` are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryFilesConfig {
    /// Root directory holding one subdirectory per database
    #[serde(default = "default_query_directory")]
    pub query_directory: PathBuf,
}

fn default_query_directory() -> PathBuf {
    PathBuf::from(DEFAULT_QUERY_DIRECTORY)
}

impl Default for QueryFilesConfig {
    fn default() -> Self {
        Self {
            query_directory: default_query_directory(),
        }
    }
}

impl QueryFilesConfig {
    /// Build a config pointing at `query_directory`.
    pub fn new(query_directory: impl Into<PathBuf>) -> Self {
        Self {
            query_directory: query_directory.into(),
        }
    }

    /// Build the plugin config from the host's raw plugin section.
    ///
    /// A missing or `null` section means "use defaults".
    pub fn from_plugin_section(section: Option<&serde_json::Value>) -> CoreResult<Self> {
        match section {
            None | Some(serde_json::Value::Null) => Ok(Self::default()),
            Some(value) => serde_json::from_value(value.clone()).map_err(|e| {
                CoreError::ConfigParseError {
                    message: format!("invalid plugin configuration: {}", e),
                }
            }),
        }
    }

    /// Query directory as an absolute path.
    ///
    /// Relative paths are joined onto the current working directory.
    pub fn query_directory_absolute(&self) -> CoreResult<PathBuf> {
        absolutize(&self.query_directory)
    }
}

/// Join a relative path onto the working directory.
pub(crate) fn absolutize(path: &Path) -> CoreResult<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}

/// Host configuration: databases to serve and per-plugin settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HostConfig {
    /// Database name to database file path (`:memory:` for in-memory)
    #[serde(default)]
    pub databases: HashMap<DatabaseName, String>,

    /// Plugin settings keyed by plugin name
    #[serde(default)]
    pub plugins: HashMap<String, serde_json::Value>,
}

impl HostConfig {
    /// Load a host config file, choosing the parser by extension.
    ///
    /// `.json` files are parsed as JSON, anything else as YAML.
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path)?;
        let is_json = path.extension().is_some_and(|e| e == "json");
        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_yaml_str(&content)
        }
    }

    /// Load a host config file if it exists, otherwise return defaults.
    pub fn load_or_default(path: &Path) -> CoreResult<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            log::debug!("No host config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Parse a YAML host config.
    pub fn from_yaml_str(content: &str) -> CoreResult<Self> {
        serde_yaml::from_str(content).map_err(|e| CoreError::ConfigParseError {
            message: e.to_string(),
        })
    }

    /// Parse a JSON host config.
    pub fn from_json_str(content: &str) -> CoreResult<Self> {
        serde_json::from_str(content).map_err(|e| CoreError::ConfigParseError {
            message: e.to_string(),
        })
    }

    /// Raw configuration section for a plugin, if the host has one.
    pub fn plugin_config(&self, plugin_name: &str) -> Option<&serde_json::Value> {
        self.plugins.get(plugin_name)
    }

    /// Database file path for a database name.
    pub fn database_path(&self, database: &str) -> Option<&str> {
        self.databases.get(database).map(String::as_str)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
