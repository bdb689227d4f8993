use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "wx")]
#[command(about = "Weather dashboard CLI")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Server URL (defaults to the configured host and port)
    #[arg(long, global = true)]
    pub(crate) server: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}
