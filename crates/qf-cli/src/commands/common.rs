//! Shared host setup for CLI commands

use anyhow::{Context, Result};
use qf_core::{
    CannedQueries, CannedQuery, DatabaseName, HostConfig, PluginRegistry, QueryFilesConfig,
    QueryFilesPlugin, PLUGIN_NAME,
};
use qf_db::DuckDbBackend;
use std::path::Path;

use crate::cli::GlobalArgs;

/// Host configuration plus the registered plugins.
pub(crate) struct Host {
    pub config: HostConfig,
    pub registry: PluginRegistry,
}

impl Host {
    /// Load the host config and register the query-files plugin.
    ///
    /// `--query-dir` replaces the plugin's configured `query_directory`.
    pub(crate) fn load(global: &GlobalArgs) -> Result<Self> {
        let config_path = Path::new(&global.config);
        let config = HostConfig::load_or_default(config_path)
            .with_context(|| format!("Failed to load config {}", config_path.display()))?;

        let plugin = match &global.query_dir {
            Some(dir) => QueryFilesPlugin::new(QueryFilesConfig::new(dir)),
            None => QueryFilesPlugin::from_host_config(&config)
                .with_context(|| format!("Invalid '{}' plugin config", PLUGIN_NAME))?,
        };

        if global.verbose {
            eprintln!(
                "[verbose] Query directory: {}",
                plugin.config().query_directory.display()
            );
        }

        let mut registry = PluginRegistry::new();
        registry.register(Box::new(plugin));

        Ok(Self { config, registry })
    }

    /// All canned queries for `database`.
    pub(crate) async fn canned_queries(&self, database: &str) -> Result<CannedQueries> {
        let database = parse_database(database)?;
        self.registry
            .canned_queries(&database)
            .await
            .with_context(|| format!("Failed to load canned queries for '{}'", database))
    }

    /// One canned query, or an error naming what is available.
    pub(crate) async fn canned_query(&self, database: &str, query: &str) -> Result<CannedQuery> {
        let mut queries = self.canned_queries(database).await?;
        match queries.shift_remove(query) {
            Some(record) => Ok(record),
            None => {
                let available: Vec<&str> = queries.keys().map(|k| k.as_str()).collect();
                anyhow::bail!(
                    "Canned query '{}' not found for database '{}' (available: {})",
                    query,
                    database,
                    if available.is_empty() {
                        "none".to_string()
                    } else {
                        available.join(", ")
                    }
                )
            }
        }
    }

    /// Open the DuckDB file configured for `database`.
    pub(crate) fn open_database(&self, database: &str) -> Result<DuckDbBackend> {
        let path = self.config.database_path(database).with_context(|| {
            format!(
                "Database '{}' is not configured under 'databases' in the host config",
                database
            )
        })?;
        DuckDbBackend::new(path).with_context(|| format!("Failed to open database at {}", path))
    }
}

fn parse_database(name: &str) -> Result<DatabaseName> {
    DatabaseName::try_new(name).context("Database name must not be empty")
}
