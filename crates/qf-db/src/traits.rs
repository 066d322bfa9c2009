//! Database trait definition

use crate::error::DbResult;
use async_trait::async_trait;
use serde::Serialize;

/// Rows returned by a canned query.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QueryResult {
    /// Column names, in select-list order
    pub columns: Vec<String>,
    /// One entry per row, values aligned with `columns`
    pub rows: Vec<Vec<serde_json::Value>>,
}

impl QueryResult {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Rows as objects keyed by column name.
    pub fn to_objects(&self) -> Vec<serde_json::Map<String, serde_json::Value>> {
        self.rows
            .iter()
            .map(|row| {
                self.columns
                    .iter()
                    .cloned()
                    .zip(row.iter().cloned())
                    .collect()
            })
            .collect()
    }
}

/// Database abstraction used to run canned queries
///
/// Implementations must be Send + Sync for async operation.
#[async_trait]
pub trait Database: Send + Sync {
    /// Execute multiple SQL statements
    async fn execute_batch(&self, sql: &str) -> DbResult<()>;

    /// Run a query and collect every row
    async fn query(&self, sql: &str) -> DbResult<QueryResult>;

    /// Count the rows a query returns
    async fn query_count(&self, sql: &str) -> DbResult<usize>;

    /// Database type identifier for logging
    fn db_type(&self) -> &'static str;
}
