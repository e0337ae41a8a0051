//! Orchestration flows
//!
//! Thin orchestrators over the injected [`DataApi`](fleetpush_client::DataApi)
//! boundary: submit a push and optionally wait for it, or look up a single
//! push request snapshot. All user-facing progress goes through an explicit
//! [`ProgressSink`] rather than ambient output.

pub mod push;
pub mod status;

#[cfg(test)]
pub mod fake;

use fleetpush_client::ClientError;
use fleetpush_core::poll::PollError;
use thiserror::Error;
use uuid::Uuid;

/// Errors terminating a flow.
///
/// Everything here aborts the current command; the only locally-recovered
/// failure mode is a transient status-check error inside the poller, which
/// never surfaces as a `FlowError`.
#[derive(Debug, Error)]
pub enum FlowError {
    #[error("{0}")]
    Validation(String),

    #[error("no released version found for package version {0}")]
    PackageNotFound(Uuid),

    #[error("no eligible subscribers found for this package version")]
    NoSubscribers,

    #[error("failed to create push request: {0}")]
    RequestCreate(String),

    #[error("failed to create push jobs: {0}")]
    PushJobCreate(String),

    #[error("failed to update push request status: {0}")]
    PushRequestUpdate(String),

    #[error("no push request found with id {0}")]
    NotFound(Uuid),

    #[error(transparent)]
    Timeout(#[from] PollError),

    #[error(transparent)]
    Api(#[from] ClientError),
}

/// Destination for user-facing progress output.
///
/// `status` carries transient stage chatter (spinner-style), `line` carries
/// lines that belong in the transcript (poll progress, final tallies).
pub trait ProgressSink {
    fn status(&mut self, message: &str);
    fn line(&mut self, message: &str);
}

/// Writes progress to stdout.
pub struct StdoutSink;

impl ProgressSink for StdoutSink {
    fn status(&mut self, message: &str) {
        use colored::Colorize;
        println!("{}", message.dimmed());
    }

    fn line(&mut self, message: &str) {
        println!("{}", message);
    }
}
