//! Integration tests for query-files

use qf_core::{
    CannedQueryProvider, DatabaseName, HostConfig, PluginRegistry, QueryFilesConfig,
    QueryFilesPlugin, PLUGIN_NAME,
};
use qf_db::{Database, DuckDbBackend};
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

fn fixtures() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn queries_dir() -> PathBuf {
    fixtures().join("queries")
}

/// Create the legislators DuckDB file from the SQL seed.
async fn legislators_db(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("legislators.duckdb");
    let seed = std::fs::read_to_string(fixtures().join("legislators.sql")).unwrap();
    let db = DuckDbBackend::from_path(&path).unwrap();
    db.execute_batch(&seed).await.unwrap();
    path
}

fn plugin() -> QueryFilesPlugin {
    QueryFilesPlugin::new(QueryFilesConfig::new(queries_dir()))
}

#[test]
fn test_plugin_is_installed() {
    let mut registry = PluginRegistry::new();
    registry.register(Box::new(plugin()));
    assert!(registry.is_installed(PLUGIN_NAME));
}

#[tokio::test]
async fn test_query_exists() {
    let presidents = queries_dir().join("legislators/presidents.sql");
    assert!(presidents.exists());

    let queries = plugin()
        .canned_queries(&DatabaseName::new("legislators"))
        .await
        .unwrap();

    assert!(!queries.is_empty());
    let record = queries.get("presidents").unwrap();
    assert_eq!(record.title(), Some("All the presidents"));
    assert_eq!(record.sql(), std::fs::read_to_string(&presidents).unwrap());

    let vice = queries.get("vice_presidents").unwrap();
    assert_eq!(vice.title(), Some("Vice presidents"));
    assert!(vice.get("description").is_some());
}

#[tokio::test]
async fn test_unknown_database_has_no_queries() {
    let queries = plugin()
        .canned_queries(&DatabaseName::new("fixtures"))
        .await
        .unwrap();
    assert!(queries.is_empty());
}

#[tokio::test]
async fn test_query_results() {
    let dir = TempDir::new().unwrap();
    let db_path = legislators_db(&dir).await;

    let queries = plugin()
        .canned_queries(&DatabaseName::new("legislators"))
        .await
        .unwrap();
    let presidents = queries.get("presidents").unwrap();

    let db = DuckDbBackend::from_path(&db_path).unwrap();
    let result = db.query(presidents.sql()).await.unwrap();

    // Grover Cleveland served twice but is one person.
    assert_eq!(result.row_count(), 45);
    assert_eq!(result.columns, vec!["person_name", "first_term"]);
    assert_eq!(result.rows[0][0], serde_json::json!("George Washington"));
    assert_eq!(db.query_count(presidents.sql()).await.unwrap(), 45);
}

#[tokio::test]
async fn test_plugin_from_host_config() {
    let yaml = format!(
        "plugins:\n  {}:\n    query_directory: {}\n",
        PLUGIN_NAME,
        queries_dir().display()
    );
    let host = HostConfig::from_yaml_str(&yaml).unwrap();
    let plugin = QueryFilesPlugin::from_host_config(&host).unwrap();

    let queries = plugin
        .canned_queries(&DatabaseName::new("legislators"))
        .await
        .unwrap();
    assert!(queries.contains_key("presidents"));
}

fn write_host_config(dir: &TempDir, db_path: &Path) -> PathBuf {
    let config = serde_json::json!({
        "databases": { "legislators": db_path },
        "plugins": { PLUGIN_NAME: { "query_directory": queries_dir() } },
    });
    let path = dir.path().join("metadata.json");
    std::fs::write(&path, serde_json::to_string(&config).unwrap()).unwrap();
    path
}

fn qf(config: &Path, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_qf"))
        .arg("--config")
        .arg(config)
        .args(args)
        .output()
        .unwrap()
}

#[tokio::test]
async fn test_cli_ls_and_run() {
    let dir = TempDir::new().unwrap();
    let db_path = legislators_db(&dir).await;
    let config = write_host_config(&dir, &db_path);

    let out = qf(&config, &["plugins"]);
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains(PLUGIN_NAME));

    let out = qf(&config, &["ls", "legislators", "--output", "json"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let listed: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(listed["presidents"]["title"], "All the presidents");

    let out = qf(&config, &["run", "legislators", "presidents", "-o", "json"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let rows: Vec<serde_json::Value> = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(rows.len(), 45);
}

#[tokio::test]
async fn test_cli_unknown_query_fails() {
    let dir = TempDir::new().unwrap();
    let db_path = legislators_db(&dir).await;
    let config = write_host_config(&dir, &db_path);

    let out = qf(&config, &["show", "legislators", "nope"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("not found"));
}

#[test]
fn test_cli_malformed_metadata_fails_listing() {
    let dir = TempDir::new().unwrap();
    let db_dir = dir.path().join("queries/broken");
    std::fs::create_dir_all(&db_dir).unwrap();
    std::fs::write(db_dir.join("x.sql"), "select 1").unwrap();
    std::fs::write(db_dir.join("x.json"), r#"{"title":"#).unwrap();

    let out = Command::new(env!("CARGO_BIN_EXE_qf"))
        .arg("--config")
        .arg(dir.path().join("missing.yml"))
        .arg("--query-dir")
        .arg(dir.path().join("queries"))
        .args(["ls", "broken"])
        .output()
        .unwrap();

    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Q006"));
}
