//! Fleetpush CLI
//!
//! Command-line tool for scheduling and monitoring bulk package upgrades
//! across subscriber organizations.

mod commands;
mod config;
mod flows;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;

#[derive(Parser)]
#[command(name = "fleetpush")]
#[command(about = "Schedule and monitor bulk package upgrades", long_about = None)]
struct Cli {
    /// Platform data API URL
    #[arg(
        long,
        env = "FLEETPUSH_PLATFORM_URL",
        default_value = "http://localhost:8080"
    )]
    platform_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config {
        platform_url: cli.platform_url,
    };

    handle_command(cli.command, &config).await
}
