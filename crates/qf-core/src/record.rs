//! Canned query records and their assembly from disk.

use crate::error::{CoreError, CoreResult};
use crate::metadata::{load_metadata, Metadata};
use crate::names::QueryName;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Reserved record key holding the query's SQL text.
pub const SQL_KEY: &str = "sql";

/// Canned queries keyed by name, in discovery order.
pub type CannedQueries = IndexMap<QueryName, CannedQuery>;

/// One canned query as handed to the host.
///
/// A plain mapping: every key from the query's metadata file plus [`SQL_KEY`].
/// Keys other than `sql` belong to the host's canned-query schema and are
/// passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CannedQuery(Metadata);

impl CannedQuery {
    /// Merge SQL text into metadata. The SQL always replaces a metadata `sql` key.
    pub fn from_parts(mut metadata: Metadata, sql: String) -> Self {
        metadata.insert(SQL_KEY.to_string(), serde_json::Value::String(sql));
        Self(metadata)
    }

    /// The query's SQL text.
    pub fn sql(&self) -> &str {
        self.0
            .get(SQL_KEY)
            .and_then(|v| v.as_str())
            .unwrap_or_default()
    }

    /// The `title` key, when it is a string.
    pub fn title(&self) -> Option<&str> {
        self.get("title").and_then(|v| v.as_str())
    }

    /// Look up any key.
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.0.get(key)
    }

    /// All keys and values, including `sql`.
    pub fn as_map(&self) -> &Metadata {
        &self.0
    }

    /// Consume the record and return the raw mapping.
    pub fn into_map(self) -> Metadata {
        self.0
    }
}

/// Build the record for one SQL file.
///
/// The SQL file must be valid UTF-8. Metadata comes from the first existing
/// sibling `.json`, `.yml`, or `.yaml` file.
pub async fn load_canned_query(sql_path: &Path) -> CoreResult<CannedQuery> {
    let sql = tokio::fs::read_to_string(sql_path)
        .await
        .map_err(|e| CoreError::SqlRead {
            path: sql_path.display().to_string(),
            source: e,
        })?;

    let metadata = load_metadata(sql_path).await?;
    Ok(CannedQuery::from_parts(metadata, sql))
}

#[cfg(test)]
#[path = "record_test.rs"]
mod tests;
