//! Push command handler
//!
//! Parses the submit inputs, runs the submit flow against the platform, and
//! renders the outcome.

use std::time::Duration;

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Args;
use colored::Colorize;
use fleetpush_client::PlatformClient;
use uuid::Uuid;

use crate::commands::colorize_status;
use crate::config::Config;
use crate::flows::push::{PushOptions, PushOutcome, submit};
use crate::flows::StdoutSink;

/// Arguments for the push command
#[derive(Args)]
pub struct PushArgs {
    /// Target package version to push
    #[arg(short = 'i', long)]
    package_version_id: Uuid,

    /// Narrow eligible subscribers with a platform query expression
    #[arg(short = 'f', long)]
    subscriber_filter: Option<String>,

    /// Schedule the push for later (RFC 3339, normalized to UTC)
    #[arg(short = 's', long)]
    schedule_start_time: Option<DateTime<Utc>>,

    /// Wait up to this many minutes for the push to finish
    #[arg(short = 'w', long)]
    wait: Option<u64>,

    /// Seconds between status checks while waiting
    #[arg(long, default_value_t = 15)]
    poll_interval: u64,
}

/// Handle the push command
pub async fn handle_push_command(args: PushArgs, config: &Config) -> Result<()> {
    let client = PlatformClient::new(&config.platform_url);
    let mut sink = StdoutSink;

    let options = PushOptions {
        package_version_id: args.package_version_id,
        subscriber_filter: args.subscriber_filter,
        schedule_start_time: args.schedule_start_time,
        wait: args.wait.map(|minutes| Duration::from_secs(minutes * 60)),
        poll_interval: Duration::from_secs(args.poll_interval),
    };

    let outcome = submit(&client, options, &mut sink).await?;

    match outcome {
        PushOutcome::Scheduled { push_request_id } | PushOutcome::Submitted { push_request_id } => {
            println!(
                "Push request created. Check on it with: {}",
                format!("fleetpush status -i {}", push_request_id).cyan()
            );
        }
        PushOutcome::Completed {
            push_request,
            succeeded,
            failed,
        } => {
            println!(
                "package install {}:",
                colorize_status(&push_request.status)
            );
            println!(
                "{} succeeded, {} failed",
                succeeded.to_string().green(),
                failed.to_string().red()
            );
        }
    }

    Ok(())
}
