//! Status command handler
//!
//! Single lookup of a push request, printed as a detail block.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use fleetpush_client::PlatformClient;
use fleetpush_core::domain::push::PushRequest;
use uuid::Uuid;

use crate::commands::colorize_status;
use crate::config::Config;
use crate::flows::status::lookup;

/// Arguments for the status command
#[derive(Args)]
pub struct StatusArgs {
    /// Push request to inspect
    #[arg(short = 'i', long)]
    push_request_id: Uuid,
}

/// Handle the status command
pub async fn handle_status_command(args: StatusArgs, config: &Config) -> Result<()> {
    let client = PlatformClient::new(&config.platform_url);

    let record = lookup(&client, args.push_request_id).await?;

    print_push_request_details(&record);

    Ok(())
}

/// Print detailed push request information
fn print_push_request_details(record: &PushRequest) {
    println!("{}", "Push Request Details:".bold());
    println!("  ID:                 {}", record.id.to_string().cyan());
    println!("  Status:             {}", colorize_status(&record.status));
    println!(
        "  Package Version ID: {}",
        record.package_version_id.to_string().dimmed()
    );

    if let Some(scheduled) = record.scheduled_start_time {
        println!(
            "  Scheduled Start:    {}",
            scheduled.format("%Y-%m-%d %H:%M:%S")
        );
    }

    if let Some(started) = record.start_time {
        println!("  Started:            {}", started.format("%Y-%m-%d %H:%M:%S"));
    }

    if let Some(ended) = record.end_time {
        println!("  Ended:              {}", ended.format("%Y-%m-%d %H:%M:%S"));
    }

    if let Some(duration) = record.duration_seconds {
        println!("  Duration:           {}s", duration);
    }
}
