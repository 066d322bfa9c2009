//! qf-db - Database layer for query-files
//!
//! This crate provides the `Database` trait used to execute canned query SQL
//! and its DuckDB implementation.

pub mod duckdb;
pub mod error;
pub mod traits;

pub use duckdb::DuckDbBackend;
pub use error::{DbError, DbResult};
pub use traits::{Database, QueryResult};
