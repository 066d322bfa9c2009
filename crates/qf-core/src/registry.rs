//! Host-side registry of canned query providers.

use crate::error::CoreResult;
use crate::names::DatabaseName;
use crate::provider::CannedQueryProvider;
use crate::record::CannedQueries;

/// Registered providers, asked in registration order.
#[derive(Default)]
pub struct PluginRegistry {
    providers: Vec<Box<dyn CannedQueryProvider>>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a provider.
    pub fn register(&mut self, provider: Box<dyn CannedQueryProvider>) {
        log::debug!("Registered plugin '{}'", provider.plugin_name());
        self.providers.push(provider);
    }

    /// Names of all registered plugins.
    pub fn plugin_names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.plugin_name()).collect()
    }

    /// Whether a plugin with this name is registered.
    pub fn is_installed(&self, plugin_name: &str) -> bool {
        self.providers.iter().any(|p| p.plugin_name() == plugin_name)
    }

    /// Collect canned queries for `database` from every provider.
    ///
    /// A later provider's query replaces an earlier one with the same name.
    /// The first provider error aborts the whole collection.
    pub async fn canned_queries(&self, database: &DatabaseName) -> CoreResult<CannedQueries> {
        let mut all = CannedQueries::new();
        for provider in &self.providers {
            let queries = provider.canned_queries(database).await?;
            for (name, query) in queries {
                if all.contains_key(&name) {
                    log::warn!(
                        "Canned query '{}' for database '{}' redefined by plugin '{}'",
                        name,
                        database,
                        provider.plugin_name()
                    );
                }
                all.insert(name, query);
            }
        }
        Ok(all)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::metadata::Metadata;
    use crate::names::QueryName;
    use crate::record::CannedQuery;
    use async_trait::async_trait;

    struct StaticProvider {
        name: &'static str,
        queries: Vec<(&'static str, &'static str)>,
    }

    #[async_trait]
    impl CannedQueryProvider for StaticProvider {
        fn plugin_name(&self) -> &str {
            self.name
        }

        async fn canned_queries(&self, _database: &DatabaseName) -> CoreResult<CannedQueries> {
            Ok(self
                .queries
                .iter()
                .map(|(name, sql)| {
                    (
                        QueryName::new(*name),
                        CannedQuery::from_parts(Metadata::new(), sql.to_string()),
                    )
                })
                .collect())
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl CannedQueryProvider for FailingProvider {
        fn plugin_name(&self) -> &str {
            "failing"
        }

        async fn canned_queries(&self, _database: &DatabaseName) -> CoreResult<CannedQueries> {
            Err(CoreError::InvalidQueryName {
                path: "broken".to_string(),
            })
        }
    }

    #[test]
    fn test_plugin_names() {
        let mut registry = PluginRegistry::new();
        assert!(registry.plugin_names().is_empty());

        registry.register(Box::new(StaticProvider {
            name: "a",
            queries: vec![],
        }));
        registry.register(Box::new(FailingProvider));

        assert_eq!(registry.plugin_names(), vec!["a", "failing"]);
        assert!(registry.is_installed("a"));
        assert!(!registry.is_installed("b"));
    }

    #[tokio::test]
    async fn test_later_provider_wins() {
        let mut registry = PluginRegistry::new();
        registry.register(Box::new(StaticProvider {
            name: "first",
            queries: vec![("shared", "select 'first'"), ("only_first", "select 1")],
        }));
        registry.register(Box::new(StaticProvider {
            name: "second",
            queries: vec![("shared", "select 'second'")],
        }));

        let queries = registry
            .canned_queries(&DatabaseName::new("db"))
            .await
            .unwrap();
        assert_eq!(queries.len(), 2);
        assert_eq!(queries.get("shared").unwrap().sql(), "select 'second'");
        assert_eq!(queries.get("only_first").unwrap().sql(), "select 1");
    }

    #[tokio::test]
    async fn test_provider_error_propagates() {
        let mut registry = PluginRegistry::new();
        registry.register(Box::new(StaticProvider {
            name: "ok",
            queries: vec![("q", "select 1")],
        }));
        registry.register(Box::new(FailingProvider));

        let result = registry.canned_queries(&DatabaseName::new("db")).await;
        assert!(matches!(result, Err(CoreError::InvalidQueryName { .. })));
    }
}
