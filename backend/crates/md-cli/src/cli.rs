use crate::commands::Commands;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "mundoctor")]
#[command(about = "Mundoctor identity reconciliation CLI")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Managed identity user to load (requires identity.secret_key)
    #[arg(long, global = true)]
    pub user_id: Option<String>,

    /// Managed identity session, revoked by `sign-out`
    #[arg(long, global = true)]
    pub session_id: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
