use crate::commands::Commands;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(about = "Member contributions roster")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Email of the signed-in user. Omit to act anonymously.
    #[arg(long, global = true)]
    pub email: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
