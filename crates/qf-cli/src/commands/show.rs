//! Show command implementation

use anyhow::Result;
use qf_core::{CannedQuery, SQL_KEY};

use super::common::Host;
use crate::cli::{GlobalArgs, OutputFormat, ShowArgs};

/// Execute the show command
pub async fn execute(args: &ShowArgs, global: &GlobalArgs) -> Result<()> {
    let host = Host::load(global)?;
    let query = host.canned_query(&args.database, &args.query).await?;

    match args.output {
        OutputFormat::Table => print_record(&args.query, &query),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&query)?),
    }

    Ok(())
}

fn print_record(name: &str, query: &CannedQuery) {
    println!("Query: {}", name);
    for (key, value) in query.as_map() {
        if key == SQL_KEY {
            continue;
        }
        match value {
            serde_json::Value::String(s) => println!("{}: {}", key, s),
            other => println!("{}: {}", key, other),
        }
    }
    println!();
    println!("{}", query.sql().trim_end());
}
