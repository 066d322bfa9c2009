//! Query directory scanning.
//!
//! Layout on disk:
//!
//! ```text
//! <query_directory>/<database>/<query>.sql     required
//! <query_directory>/<database>/<query>.json    optional
//! <query_directory>/<database>/<query>.yml     optional
//! <query_directory>/<database>/<query>.yaml    optional
//! ```
//!
//! Only the immediate entries of `<database>/` are considered. Nothing is
//! cached; each call to [`QueryDirectory::list`] rescans the disk.

use crate::config::{absolutize, QueryFilesConfig};
use crate::error::{CoreError, CoreResult};
use crate::names::QueryName;
use crate::record::{load_canned_query, CannedQueries};
use std::path::{Path, PathBuf};

/// Root directory holding one query subdirectory per database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryDirectory {
    root: PathBuf,
}

impl QueryDirectory {
    /// Resolve the configured query directory to an absolute path.
    pub fn new(config: &QueryFilesConfig) -> CoreResult<Self> {
        Ok(Self {
            root: config.query_directory_absolute()?,
        })
    }

    /// Resolve an explicit path.
    pub fn from_path(path: impl AsRef<Path>) -> CoreResult<Self> {
        Ok(Self {
            root: absolutize(path.as_ref())?,
        })
    }

    /// Absolute root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Subdirectory holding the queries for `database`.
    pub fn database_dir(&self, database: &str) -> PathBuf {
        self.root.join(database)
    }

    /// Load every canned query for `database`.
    ///
    /// A missing database subdirectory is not an error: the database simply
    /// has no file-based queries. Any unreadable SQL file or malformed
    /// metadata file fails the whole listing.
    pub async fn list(&self, database: &str) -> CoreResult<CannedQueries> {
        let mut queries = CannedQueries::new();

        let db_dir = self.database_dir(database);
        if !is_dir(&db_dir).await {
            log::debug!(
                "No query directory for database '{}' at {}",
                database,
                db_dir.display()
            );
            return Ok(queries);
        }

        for sql_path in sql_files(&db_dir).await? {
            let name = query_name(&sql_path)?;
            log::debug!("Loading canned query '{}' from {}", name, sql_path.display());
            let record = load_canned_query(&sql_path).await?;
            queries.insert(name, record);
        }

        Ok(queries)
    }
}

async fn is_dir(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|m| m.is_dir())
        .unwrap_or(false)
}

/// Immediate `.sql` files of `dir`, in directory-listing order.
async fn sql_files(dir: &Path) -> CoreResult<Vec<PathBuf>> {
    let read_err = |e: std::io::Error| CoreError::DirectoryRead {
        path: dir.display().to_string(),
        source: e,
    };

    let mut files = Vec::new();
    let mut entries = tokio::fs::read_dir(dir).await.map_err(read_err)?;
    while let Some(entry) = entries.next_entry().await.map_err(read_err)? {
        let path = entry.path();
        if !path.extension().is_some_and(|e| e == "sql") {
            continue;
        }
        // Follows symlinks; a dangling link surfaces later as a read error.
        if is_dir(&path).await {
            continue;
        }
        files.push(path);
    }
    Ok(files)
}

/// Query name for a SQL file: its stem.
fn query_name(sql_path: &Path) -> CoreResult<QueryName> {
    sql_path
        .file_stem()
        .and_then(|s| s.to_str())
        .and_then(QueryName::try_new)
        .ok_or_else(|| CoreError::InvalidQueryName {
            path: sql_path.display().to_string(),
        })
}

#[cfg(test)]
#[path = "resolver_test.rs"]
mod tests;
