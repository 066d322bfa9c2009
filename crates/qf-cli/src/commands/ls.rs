//! List command implementation

use anyhow::Result;
use qf_core::CannedQueries;

use super::common::Host;
use crate::cli::{GlobalArgs, LsArgs, OutputFormat};

/// Execute the ls command
pub async fn execute(args: &LsArgs, global: &GlobalArgs) -> Result<()> {
    let host = Host::load(global)?;
    let queries = host.canned_queries(&args.database).await?;

    match args.output {
        OutputFormat::Table => print_table(&queries),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&queries)?),
    }

    Ok(())
}

fn print_table(queries: &CannedQueries) {
    if queries.is_empty() {
        println!("No canned queries found.");
        return;
    }

    let name_width = queries.keys().map(|k| k.len()).max().unwrap_or(4).max(4);

    println!("{:<name_width$}  TITLE", "NAME", name_width = name_width);
    println!("{:-<name_width$}  {}", "", "-".repeat(40), name_width = name_width);

    for (name, query) in queries {
        println!(
            "{:<name_width$}  {}",
            name,
            query.title().unwrap_or("-"),
            name_width = name_width
        );
    }

    println!();
    println!("{} canned queries found", queries.len());
}
