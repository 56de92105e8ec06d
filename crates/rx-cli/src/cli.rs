use crate::commands::Commands;

use clap::Parser;
use rx_core::Surface;

#[derive(Parser, Debug)]
#[command(name = "rx")]
#[command(about = "Session client for the Rx ordering platform")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Which front-end session to act on (admin or customer)
    #[arg(long, global = true, default_value = "customer")]
    pub surface: Surface,

    /// Backend URL, overrides api.base_url and RX_API_BASE_URL
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
