//! Error types for qf-core

use thiserror::Error;

/// Core error type for query-files
#[derive(Error, Debug)]
pub enum CoreError {
    /// Q001: Host configuration file not found
    #[error("[Q001] Config file not found: {path}")]
    ConfigNotFound { path: String },

    /// Q002: Failed to parse host or plugin configuration
    #[error("[Q002] Failed to parse config: {message}")]
    ConfigParseError { message: String },

    /// Q003: Query directory could not be listed
    #[error("[Q003] Failed to list query directory '{path}': {source}")]
    DirectoryRead {
        path: String,
        source: std::io::Error,
    },

    /// Q004: SQL file could not be read (missing, unreadable, or not UTF-8)
    #[error("[Q004] Failed to read SQL file '{path}': {source}")]
    SqlRead {
        path: String,
        source: std::io::Error,
    },

    /// Q005: Metadata file could not be read
    #[error("[Q005] Failed to read metadata file '{path}': {source}")]
    MetadataRead {
        path: String,
        source: std::io::Error,
    },

    /// Q006: Metadata file is not valid JSON
    #[error("[Q006] Invalid JSON metadata in '{path}': {source}")]
    MetadataJson {
        path: String,
        source: serde_json::Error,
    },

    /// Q007: Metadata file is not valid YAML
    #[error("[Q007] Invalid YAML metadata in '{path}': {source}")]
    MetadataYaml {
        path: String,
        source: serde_yaml::Error,
    },

    /// Q008: Metadata parsed, but to something other than a mapping
    #[error("[Q008] Metadata in '{path}' must be a mapping, found {found}")]
    MetadataNotMapping { path: String, found: String },

    /// Q009: SQL file stem cannot be used as a query name
    #[error("[Q009] Invalid query file name: {path}")]
    InvalidQueryName { path: String },

    /// Q010: IO error
    #[error("[Q010] IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
