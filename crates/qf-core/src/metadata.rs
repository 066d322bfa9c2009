//! Sidecar metadata discovery and parsing.
//!
//! A query `x.sql` may carry metadata in `x.json`, `x.yml`, or `x.yaml`.
//! Candidates are checked in that order and the first existing file wins;
//! the others are ignored even when present.

use crate::error::{CoreError, CoreResult};
use std::path::{Path, PathBuf};

/// Parsed metadata: string keys to arbitrary values.
pub type Metadata = serde_json::Map<String, serde_json::Value>;

/// Metadata extensions in lookup priority order.
pub const METADATA_EXTENSIONS: [&str; 3] = ["json", "yml", "yaml"];

/// Parse strategy for a metadata file, chosen by its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataFormat {
    /// `.json`
    Json,
    /// `.yml` or `.yaml`
    Yaml,
    /// Anything else. Parses to an empty mapping.
    Unknown,
}

impl MetadataFormat {
    /// Pick the format for a file path.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => MetadataFormat::Json,
            Some("yml") | Some("yaml") => MetadataFormat::Yaml,
            _ => MetadataFormat::Unknown,
        }
    }

    /// Parse `content` read from `path`.
    ///
    /// Malformed documents and documents that are not mappings are errors.
    /// An empty YAML document is an empty mapping.
    pub fn parse(self, content: &str, path: &Path) -> CoreResult<Metadata> {
        match self {
            MetadataFormat::Json => {
                let value: serde_json::Value =
                    serde_json::from_str(content).map_err(|e| CoreError::MetadataJson {
                        path: path.display().to_string(),
                        source: e,
                    })?;
                into_mapping(value, path)
            }
            MetadataFormat::Yaml => {
                let value: serde_yaml::Value =
                    serde_yaml::from_str(content).map_err(|e| CoreError::MetadataYaml {
                        path: path.display().to_string(),
                        source: e,
                    })?;
                if value.is_null() {
                    return Ok(Metadata::new());
                }
                let value = serde_json::to_value(value).map_err(|e| {
                    CoreError::MetadataNotMapping {
                        path: path.display().to_string(),
                        found: format!("a value with no JSON equivalent ({})", e),
                    }
                })?;
                into_mapping(value, path)
            }
            MetadataFormat::Unknown => Ok(Metadata::new()),
        }
    }
}

fn into_mapping(value: serde_json::Value, path: &Path) -> CoreResult<Metadata> {
    match value {
        serde_json::Value::Object(map) => Ok(map),
        other => Err(CoreError::MetadataNotMapping {
            path: path.display().to_string(),
            found: value_kind(&other).to_string(),
        }),
    }
}

fn value_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "a mapping",
    }
}

/// Find the metadata file for a SQL file, if any.
///
/// Swaps the SQL file's extension for each of [`METADATA_EXTENSIONS`] in
/// order and returns the first path that exists. A candidate whose existence
/// cannot be determined is a read error.
pub async fn find_metadata_path(sql_path: &Path) -> CoreResult<Option<PathBuf>> {
    for ext in METADATA_EXTENSIONS {
        let candidate = sql_path.with_extension(ext);
        let exists = tokio::fs::try_exists(&candidate)
            .await
            .map_err(|e| CoreError::MetadataRead {
                path: candidate.display().to_string(),
                source: e,
            })?;
        if exists {
            return Ok(Some(candidate));
        }
    }
    Ok(None)
}

/// Load the metadata mapping for a SQL file.
///
/// No metadata file means an empty mapping. A file that disappears between
/// the existence check and the read surfaces as a read error.
pub async fn load_metadata(sql_path: &Path) -> CoreResult<Metadata> {
    let Some(path) = find_metadata_path(sql_path).await? else {
        return Ok(Metadata::new());
    };

    log::debug!("Reading metadata for {} from {}", sql_path.display(), path.display());

    let content = tokio::fs::read_to_string(&path)
        .await
        .map_err(|e| CoreError::MetadataRead {
            path: path.display().to_string(),
            source: e,
        })?;

    MetadataFormat::from_path(&path).parse(&content, &path)
}

#[cfg(test)]
#[path = "metadata_test.rs"]
mod tests;
