//! Run command implementation

use anyhow::{Context, Result};
use qf_db::{Database, QueryResult};

use super::common::Host;
use crate::cli::{GlobalArgs, OutputFormat, RunArgs};

/// Execute the run command
pub async fn execute(args: &RunArgs, global: &GlobalArgs) -> Result<()> {
    let host = Host::load(global)?;
    let query = host.canned_query(&args.database, &args.query).await?;
    let db = host.open_database(&args.database)?;

    log::debug!("Running canned query '{}' on {}", args.query, db.db_type());

    let result = db
        .query(query.sql())
        .await
        .with_context(|| format!("Canned query '{}' failed", args.query))?;

    match args.output {
        OutputFormat::Table => print_table(&result),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result.to_objects())?)
        }
    }

    if global.verbose {
        eprintln!("[verbose] {} rows", result.row_count());
    }

    Ok(())
}

fn print_table(result: &QueryResult) {
    let cells: Vec<Vec<String>> = result
        .rows
        .iter()
        .map(|row| row.iter().map(cell_text).collect())
        .collect();

    let widths: Vec<usize> = result
        .columns
        .iter()
        .enumerate()
        .map(|(i, col)| {
            cells
                .iter()
                .map(|row| row.get(i).map_or(0, |c| c.len()))
                .max()
                .unwrap_or(0)
                .max(col.len())
        })
        .collect();

    let header: Vec<String> = result
        .columns
        .iter()
        .zip(&widths)
        .map(|(col, w)| format!("{:<w$}", col, w = *w))
        .collect();
    println!("{}", header.join("  "));

    let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    println!("{}", separator.join("  "));

    for row in &cells {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, w)| format!("{:<w$}", cell, w = *w))
            .collect();
        println!("{}", line.join("  "));
    }

    println!();
    println!("{} rows", result.row_count());
}

fn cell_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => "null".to_string(),
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
