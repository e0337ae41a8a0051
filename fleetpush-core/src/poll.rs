//! Status poller
//!
//! Drives a bounded-duration, fixed-interval status-check loop against a
//! caller-supplied asynchronous probe. The probe is the only contact with
//! the outside world; the poller itself owns nothing but the timer.
//!
//! Time flows through `tokio::time`, so tests run the loop on a paused
//! virtual clock without real delays.

use std::future::Future;
use std::time::Duration;

use thiserror::Error;
use tokio::time::{self, Instant};
use tracing::{debug, warn};

/// Result of one status-check attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome<T> {
    /// Not done yet; `state` is the remote status label for progress lines.
    Pending { state: String },
    /// Terminal state reached; polling stops immediately.
    Completed(T),
    /// The probe itself could not determine status (transient lookup
    /// error). Logged and retried, never escalated.
    Failed(String),
}

/// Errors terminating a polling run.
#[derive(Debug, Error)]
pub enum PollError {
    #[error(
        "timed out after {waited:?} ({attempts} status checks) without reaching a terminal state"
    )]
    TimedOut { waited: Duration, attempts: u32 },
}

/// Fixed-interval poller with a total elapsed-time budget.
///
/// Each call to [`Poller::run`] starts a fresh timer; nothing is cached
/// across runs.
#[derive(Debug, Clone, Copy)]
pub struct Poller {
    interval: Duration,
    timeout: Duration,
}

impl Poller {
    pub fn new(interval: Duration, timeout: Duration) -> Self {
        Self { interval, timeout }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Poll `probe` until it completes or the time budget runs out.
    pub async fn run<T, P, Fut>(&self, probe: P) -> Result<T, PollError>
    where
        P: FnMut() -> Fut,
        Fut: Future<Output = PollOutcome<T>>,
    {
        self.run_with_progress(probe, |_, _| {}).await
    }

    /// Poll `probe`, invoking `on_pending` with the remote state label and
    /// the configured interval after every attempt that comes back pending.
    ///
    /// A `Failed` outcome is logged and the loop continues; a single noisy
    /// status check must not kill a long wait. The run fails only when the
    /// next attempt would start past the deadline.
    pub async fn run_with_progress<T, P, Fut, F>(
        &self,
        mut probe: P,
        mut on_pending: F,
    ) -> Result<T, PollError>
    where
        P: FnMut() -> Fut,
        Fut: Future<Output = PollOutcome<T>>,
        F: FnMut(&str, Duration),
    {
        let started = Instant::now();
        let deadline = started + self.timeout;
        let mut attempts: u32 = 0;

        loop {
            attempts += 1;

            match probe().await {
                PollOutcome::Completed(payload) => {
                    debug!(attempts, "polling completed");
                    return Ok(payload);
                }
                PollOutcome::Pending { state } => {
                    on_pending(&state, self.interval);
                }
                PollOutcome::Failed(message) => {
                    warn!(attempts, %message, "status check failed, retrying");
                }
            }

            if Instant::now() + self.interval > deadline {
                return Err(PollError::TimedOut {
                    waited: started.elapsed(),
                    attempts,
                });
            }

            time::sleep(self.interval).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    const INTERVAL: Duration = Duration::from_secs(15);
    const TIMEOUT: Duration = Duration::from_secs(60);

    /// Probe that replays a scripted outcome sequence and counts calls.
    fn scripted(
        outcomes: Vec<PollOutcome<&'static str>>,
    ) -> (
        impl FnMut() -> std::pin::Pin<Box<dyn Future<Output = PollOutcome<&'static str>>>>,
        Rc<RefCell<u32>>,
    ) {
        let queue = Rc::new(RefCell::new(VecDeque::from(outcomes)));
        let calls = Rc::new(RefCell::new(0u32));
        let calls_out = Rc::clone(&calls);

        let probe = move || -> std::pin::Pin<Box<dyn Future<Output = PollOutcome<&'static str>>>> {
            let queue = Rc::clone(&queue);
            let calls = Rc::clone(&calls);
            Box::pin(async move {
                *calls.borrow_mut() += 1;
                queue
                    .borrow_mut()
                    .pop_front()
                    .expect("probe called after completion")
            })
        };

        (probe, calls_out)
    }

    fn pending(state: &str) -> PollOutcome<&'static str> {
        PollOutcome::Pending {
            state: state.to_string(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_completed_returns_payload_immediately() {
        let (probe, calls) = scripted(vec![PollOutcome::Completed("done")]);
        let poller = Poller::new(INTERVAL, TIMEOUT);

        let result = poller.run(probe).await.unwrap();

        assert_eq!(result, "done");
        assert_eq!(*calls.borrow(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_probe_calls_after_completion() {
        // Extra outcomes left in the script would panic if probed.
        let (probe, calls) = scripted(vec![
            pending("In Progress"),
            PollOutcome::Completed("done"),
            PollOutcome::Completed("never reached"),
        ]);
        let poller = Poller::new(INTERVAL, TIMEOUT);

        let result = poller.run(probe).await.unwrap();

        assert_eq!(result, "done");
        assert_eq!(*calls.borrow(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_pending_sequence_reports_progress() {
        let (probe, _) = scripted(vec![
            pending("In Progress"),
            pending("In Progress"),
            PollOutcome::Completed("done"),
        ]);
        let poller = Poller::new(INTERVAL, TIMEOUT);

        let progress = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&progress);
        let result = poller
            .run_with_progress(probe, |state, wait| {
                sink.borrow_mut().push(format!("{state} {}s", wait.as_secs()));
            })
            .await
            .unwrap();

        assert_eq!(result, "done");
        assert_eq!(
            *progress.borrow(),
            vec!["In Progress 15s", "In Progress 15s"]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_probe_failure_does_not_terminate_loop() {
        let (probe, calls) = scripted(vec![
            PollOutcome::Failed("connection reset".to_string()),
            PollOutcome::Completed("done"),
        ]);
        let poller = Poller::new(INTERVAL, TIMEOUT);

        let before = Instant::now();
        let result = poller.run(probe).await.unwrap();

        assert_eq!(result, "done");
        assert_eq!(*calls.borrow(), 2);
        // The retry happens after exactly one interval.
        assert_eq!(before.elapsed(), INTERVAL);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_after_budget_exhausted() {
        let forever: Vec<_> = (0..16).map(|_| pending("Pending")).collect();
        let (probe, calls) = scripted(forever);
        let poller = Poller::new(INTERVAL, TIMEOUT);

        let err = poller.run(probe).await.unwrap_err();

        let PollError::TimedOut { attempts, waited } = err;
        // At least floor(timeout / interval) attempts before giving up.
        assert!(attempts >= 4, "only {attempts} attempts");
        assert_eq!(attempts, *calls.borrow());
        assert!(waited >= TIMEOUT - INTERVAL);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fresh_timer_per_run() {
        let poller = Poller::new(INTERVAL, Duration::from_secs(30));

        let (first, _) = scripted(vec![pending("Pending"), pending("Pending"), pending("Pending")]);
        assert!(poller.run(first).await.is_err());

        // A second run gets the full budget again.
        let (second, calls) = scripted(vec![
            pending("Pending"),
            PollOutcome::Completed("done"),
        ]);
        assert_eq!(poller.run(second).await.unwrap(), "done");
        assert_eq!(*calls.borrow(), 2);
    }
}
