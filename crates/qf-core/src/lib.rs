//! qf-core - Core library for query-files
//!
//! Canned queries written as plain `.sql` files, one directory per database,
//! with optional `.json`/`.yml`/`.yaml` metadata next to each file. This
//! crate discovers those files, merges metadata, and exposes the result to a
//! host through the [`CannedQueryProvider`] trait.

pub mod config;
pub mod error;
pub mod metadata;
pub mod names;
mod newtype_string;
pub mod provider;
pub mod record;
pub mod registry;
pub mod resolver;

pub use config::{HostConfig, QueryFilesConfig, DEFAULT_QUERY_DIRECTORY};
pub use error::{CoreError, CoreResult};
pub use metadata::{Metadata, MetadataFormat, METADATA_EXTENSIONS};
pub use names::{DatabaseName, QueryName};
pub use provider::{CannedQueryProvider, QueryFilesPlugin, PLUGIN_NAME};
pub use record::{load_canned_query, CannedQueries, CannedQuery, SQL_KEY};
pub use registry::PluginRegistry;
pub use resolver::QueryDirectory;
