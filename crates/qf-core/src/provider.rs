//! Canned query provider trait and the query-files plugin.

use crate::config::{HostConfig, QueryFilesConfig};
use crate::error::CoreResult;
use crate::names::DatabaseName;
use crate::record::CannedQueries;
use crate::resolver::QueryDirectory;
use async_trait::async_trait;

/// Name under which the plugin is registered and configured.
pub const PLUGIN_NAME: &str = "datasette-query-files";

/// Source of canned queries for a host database.
///
/// The host asks once per database whenever it needs the query list;
/// implementations must not assume results are cached between calls.
#[async_trait]
pub trait CannedQueryProvider: Send + Sync {
    /// Plugin name used for registration and config lookup
    fn plugin_name(&self) -> &str;

    /// Canned queries for `database`
    async fn canned_queries(&self, database: &DatabaseName) -> CoreResult<CannedQueries>;
}

/// Canned queries read from `.sql` files in a query directory.
#[derive(Debug, Clone)]
pub struct QueryFilesPlugin {
    config: QueryFilesConfig,
}

impl QueryFilesPlugin {
    pub fn new(config: QueryFilesConfig) -> Self {
        Self { config }
    }

    /// Build the plugin from the host's `plugins` section.
    pub fn from_host_config(host: &HostConfig) -> CoreResult<Self> {
        let config = QueryFilesConfig::from_plugin_section(host.plugin_config(PLUGIN_NAME))?;
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &QueryFilesConfig {
        &self.config
    }
}

#[async_trait]
impl CannedQueryProvider for QueryFilesPlugin {
    fn plugin_name(&self) -> &str {
        PLUGIN_NAME
    }

    async fn canned_queries(&self, database: &DatabaseName) -> CoreResult<CannedQueries> {
        // Resolved per call so a changed working directory is honoured.
        let directory = QueryDirectory::new(&self.config)?;
        directory.list(database).await
    }
}
