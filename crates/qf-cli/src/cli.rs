//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand, ValueEnum};

/// qf - canned queries from plain SQL files
#[derive(Parser, Debug)]
#[command(name = "qf")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Host config file (YAML, or JSON with a .json extension)
    #[arg(short, long, global = true, default_value = "metadata.yml", env = "QF_CONFIG")]
    pub config: String,

    /// Override the plugin's query directory
    #[arg(short, long, global = true)]
    pub query_dir: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List installed plugins
    Plugins,

    /// List canned queries for a database
    Ls(LsArgs),

    /// Print a single canned query definition
    Show(ShowArgs),

    /// Execute a canned query against its database
    Run(RunArgs),
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// JSON output
    Json,
}

/// Arguments for the ls command
#[derive(Args, Debug)]
pub struct LsArgs {
    /// Database name
    pub database: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub output: OutputFormat,
}

/// Arguments for the show command
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Database name
    pub database: String,

    /// Canned query name
    pub query: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub output: OutputFormat,
}

/// Arguments for the run command
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Database name
    pub database: String,

    /// Canned query name
    pub query: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub output: OutputFormat,
}
