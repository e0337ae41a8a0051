//! Submit flow
//!
//! Builds one push request, fans it out into per-subscriber push jobs, and
//! optionally polls the request's status field until it goes terminal.
//!
//! No compensating rollback is performed: once the push request exists
//! remotely, later failures leave it and any created jobs as-is.

use std::time::Duration;

use chrono::{DateTime, Utc};
use fleetpush_client::{ClientError, DataApi};
use fleetpush_core::domain::package::SubscriberSet;
use fleetpush_core::domain::push::{PushRequest, PushStatus};
use fleetpush_core::dto::push::{CreatePushJob, CreatePushRequest};
use fleetpush_core::poll::{PollOutcome, Poller};
use tracing::debug;
use uuid::Uuid;

use super::{FlowError, ProgressSink};

/// Inputs to the submit flow.
#[derive(Debug, Clone)]
pub struct PushOptions {
    pub package_version_id: Uuid,
    /// Opaque platform-dialect expression narrowing the eligible set.
    pub subscriber_filter: Option<String>,
    /// When set, the platform scheduler starts the push; must not be in
    /// the past.
    pub schedule_start_time: Option<DateTime<Utc>>,
    /// Total polling budget; `None` means return right after submission.
    pub wait: Option<Duration>,
    /// Delay between status checks while waiting.
    pub poll_interval: Duration,
}

/// How the submit flow ended.
#[derive(Debug)]
pub enum PushOutcome {
    /// Scheduled for later; the platform owns the rest.
    Scheduled { push_request_id: Uuid },
    /// Submitted without a wait budget; inspect later via `status`.
    Submitted { push_request_id: Uuid },
    /// Waited until the request reached a terminal state.
    Completed {
        push_request: PushRequest,
        succeeded: usize,
        failed: usize,
    },
}

/// Run the full submit flow against the injected data API.
pub async fn submit(
    api: &dyn DataApi,
    opts: PushOptions,
    sink: &mut dyn ProgressSink,
) -> Result<PushOutcome, FlowError> {
    // Validate before touching the platform.
    if let Some(start) = opts.schedule_start_time {
        if start < Utc::now() {
            return Err(FlowError::Validation(
                "schedule start time must be in the future".to_string(),
            ));
        }
    }

    sink.status("getting eligible subscribers");

    let baseline = api
        .current_package_version(opts.package_version_id)
        .await?
        .ok_or(FlowError::PackageNotFound(opts.package_version_id))?;

    let subscribers = api
        .eligible_subscribers(
            baseline.package_id,
            baseline.number(),
            opts.subscriber_filter.as_deref(),
        )
        .await?;

    let targets = SubscriberSet::from_subscribers(&subscribers);
    if targets.is_empty() {
        return Err(FlowError::NoSubscribers);
    }

    debug!(
        subscribers = targets.len(),
        package_version = %opts.package_version_id,
        "resolved eligible subscribers"
    );

    sink.status("creating push request");

    let created = api
        .create_push_request(CreatePushRequest {
            package_version_id: opts.package_version_id,
            scheduled_start_time: opts.schedule_start_time,
        })
        .await
        .map_err(|e| match e {
            // Remote rejection text passes through verbatim.
            ClientError::ApiError { message, .. } => FlowError::RequestCreate(message),
            other => FlowError::Api(other),
        })?;

    sink.status(&format!(
        "creating push jobs for {} subscribers",
        targets.len()
    ));

    let rows: Vec<CreatePushJob> = targets
        .iter()
        .map(|subscriber_id| CreatePushJob {
            push_request_id: created.id,
            subscriber_id: *subscriber_id,
        })
        .collect();

    let results = api.create_push_jobs(rows).await?;

    let mut errors: Vec<String> = Vec::new();
    for result in &results {
        if !result.success {
            if result.errors.is_empty() {
                errors.push("push job rejected".to_string());
            } else {
                errors.extend(result.errors.iter().cloned());
            }
        }
    }
    if !errors.is_empty() {
        return Err(FlowError::PushJobCreate(errors.join("\n")));
    }

    sink.status("updating push request status");

    api.update_push_request_status(created.id, PushStatus::Pending)
        .await
        .map_err(|e| FlowError::PushRequestUpdate(e.to_string()))?;

    sink.line("Push request submitted successfully");

    if opts.schedule_start_time.is_some() {
        return Ok(PushOutcome::Scheduled {
            push_request_id: created.id,
        });
    }

    match opts.wait {
        Some(budget) => wait_for_completion(api, created.id, opts.poll_interval, budget, sink).await,
        None => Ok(PushOutcome::Submitted {
            push_request_id: created.id,
        }),
    }
}

/// Poll the push request's status until terminal, then tally its jobs.
async fn wait_for_completion(
    api: &dyn DataApi,
    push_request_id: Uuid,
    interval: Duration,
    budget: Duration,
    sink: &mut dyn ProgressSink,
) -> Result<PushOutcome, FlowError> {
    let poller = Poller::new(interval, budget);

    let probe = || async move {
        match api.get_push_request(push_request_id).await {
            Ok(Some(request)) if request.status.is_terminal() => PollOutcome::Completed(request),
            Ok(Some(request)) => PollOutcome::Pending {
                state: request.status.to_string(),
            },
            Ok(None) => PollOutcome::Failed("push request not visible yet".to_string()),
            Err(e) => PollOutcome::Failed(e.to_string()),
        }
    };

    let final_request = poller
        .run_with_progress(probe, |state, wait| {
            sink.line(&format!(
                "package installs {}, sleeping for {} seconds",
                state,
                wait.as_secs()
            ));
        })
        .await?;

    let jobs = api.list_push_jobs(push_request_id).await?;
    let succeeded = jobs
        .iter()
        .filter(|job| job.status == PushStatus::Succeeded)
        .count();
    let failed = jobs.len() - succeeded;

    Ok(PushOutcome::Completed {
        push_request: final_request,
        succeeded,
        failed,
    })
}
