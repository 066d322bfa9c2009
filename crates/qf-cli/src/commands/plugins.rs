//! Plugins command implementation

use anyhow::Result;

use super::common::Host;
use crate::cli::GlobalArgs;

/// Execute the plugins command
pub async fn execute(global: &GlobalArgs) -> Result<()> {
    let host = Host::load(global)?;
    for name in host.registry.plugin_names() {
        println!("{}", name);
    }
    Ok(())
}
