//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod push;
mod status;

pub use push::PushArgs;
pub use status::StatusArgs;

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;
use fleetpush_core::domain::push::PushStatus;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Schedule or trigger a bulk package upgrade
    Push(PushArgs),
    /// Show the current state of a push request
    Status(StatusArgs),
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
///
/// # Arguments
/// * `command` - The command to execute
/// * `config` - The CLI configuration
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Push(args) => push::handle_push_command(args, config).await,
        Commands::Status(args) => status::handle_status_command(args, config).await,
    }
}

/// Colorize a push status for display
pub(crate) fn colorize_status(status: &PushStatus) -> colored::ColoredString {
    let status_str = status.to_string();
    match status {
        PushStatus::Created => status_str.dimmed(),
        PushStatus::Pending => status_str.yellow(),
        PushStatus::InProgress => status_str.cyan(),
        PushStatus::Succeeded => status_str.green(),
        PushStatus::Failed => status_str.red(),
        PushStatus::Canceled => status_str.dimmed(),
    }
}
