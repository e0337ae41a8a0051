//! Scripted in-memory `DataApi` and progress sink for flow tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use fleetpush_client::api::DataApi;
use fleetpush_client::error::{ClientError, Result};
use fleetpush_core::domain::package::{PackageVersion, ReleaseState, Subscriber, VersionNumber};
use fleetpush_core::domain::push::{PushJob, PushRequest, PushStatus};
use fleetpush_core::dto::push::{CreatePushJob, CreatePushRequest, SaveResult};
use uuid::Uuid;

use super::ProgressSink;

/// Fake platform with canned responses and a call log.
pub struct FakeApi {
    /// The version id flows are pointed at.
    pub package_version_id: Uuid,
    /// Id assigned to the created push request.
    pub assigned_id: Uuid,
    pub current_version: Option<PackageVersion>,
    pub subscribers: Vec<Subscriber>,
    /// Non-empty makes the batched job create report one failed record.
    pub job_errors: Vec<String>,
    pub fail_update: bool,
    /// Jobs returned by `list_push_jobs`.
    pub jobs: Vec<PushJob>,
    snapshots: Mutex<VecDeque<PushRequest>>,
    calls: Mutex<Vec<String>>,
    created_jobs: Mutex<Vec<CreatePushJob>>,
}

impl FakeApi {
    pub fn new() -> Self {
        let package_version_id = Uuid::new_v4();
        let current_version = PackageVersion {
            id: package_version_id,
            package_id: Uuid::new_v4(),
            major: 2,
            minor: 1,
            patch: 0,
            release_state: ReleaseState::Released,
        };
        Self {
            package_version_id,
            assigned_id: Uuid::new_v4(),
            current_version: Some(current_version),
            subscribers: Vec::new(),
            job_errors: Vec::new(),
            fail_update: false,
            jobs: Vec::new(),
            snapshots: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
            created_jobs: Mutex::new(Vec::new()),
        }
    }

    /// Queue snapshots returned by successive `get_push_request` calls.
    pub fn push_snapshots(&self, snapshots: Vec<PushRequest>) {
        self.snapshots.lock().unwrap().extend(snapshots);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn created_jobs(&self) -> Vec<CreatePushJob> {
        self.created_jobs.lock().unwrap().clone()
    }

    /// Build a job under the assigned push request.
    pub fn job(&self, subscriber_id: Uuid, status: PushStatus) -> PushJob {
        PushJob {
            id: Uuid::new_v4(),
            push_request_id: self.assigned_id,
            subscriber_id,
            status,
        }
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }
}

/// A subscriber record with the given org key.
pub fn subscriber(id: Uuid) -> Subscriber {
    Subscriber {
        id,
        instance: "na-1".to_string(),
        installed_version_id: None,
    }
}

/// A push request snapshot in the given status.
pub fn snapshot(id: Uuid, status: PushStatus) -> PushRequest {
    PushRequest {
        id,
        package_version_id: Uuid::new_v4(),
        scheduled_start_time: None,
        status,
        start_time: None,
        end_time: None,
        duration_seconds: None,
    }
}

#[async_trait]
impl DataApi for FakeApi {
    async fn get_push_request(&self, _id: Uuid) -> Result<Option<PushRequest>> {
        self.record("get_push_request");
        Ok(self.snapshots.lock().unwrap().pop_front())
    }

    async fn current_package_version(
        &self,
        _package_version_id: Uuid,
    ) -> Result<Option<PackageVersion>> {
        self.record("current_package_version");
        Ok(self.current_version.clone())
    }

    async fn eligible_subscribers(
        &self,
        _package_id: Uuid,
        _below: VersionNumber,
        _filter: Option<&str>,
    ) -> Result<Vec<Subscriber>> {
        self.record("eligible_subscribers");
        Ok(self.subscribers.clone())
    }

    async fn create_push_request(&self, req: CreatePushRequest) -> Result<PushRequest> {
        self.record("create_push_request");
        Ok(PushRequest {
            id: self.assigned_id,
            package_version_id: req.package_version_id,
            scheduled_start_time: req.scheduled_start_time,
            status: PushStatus::Created,
            start_time: None,
            end_time: None,
            duration_seconds: None,
        })
    }

    async fn create_push_jobs(&self, jobs: Vec<CreatePushJob>) -> Result<Vec<SaveResult>> {
        self.record(format!("create_push_jobs:{}", jobs.len()));
        self.created_jobs.lock().unwrap().extend(jobs.iter().cloned());

        if !self.job_errors.is_empty() {
            return Ok(vec![SaveResult {
                id: None,
                success: false,
                errors: self.job_errors.clone(),
            }]);
        }

        Ok(jobs
            .iter()
            .map(|_| SaveResult {
                id: Some(Uuid::new_v4()),
                success: true,
                errors: Vec::new(),
            })
            .collect())
    }

    async fn update_push_request_status(&self, _id: Uuid, status: PushStatus) -> Result<()> {
        self.record(format!("update_status:{:?}", status));
        if self.fail_update {
            return Err(ClientError::api_error(500, "unable to lock row"));
        }
        Ok(())
    }

    async fn list_push_jobs(&self, _push_request_id: Uuid) -> Result<Vec<PushJob>> {
        self.record("list_push_jobs");
        Ok(self.jobs.clone())
    }
}

/// Sink that records everything written to it.
#[derive(Default)]
pub struct RecordingSink {
    pub statuses: Vec<String>,
    pub lines: Vec<String>,
}

impl ProgressSink for RecordingSink {
    fn status(&mut self, message: &str) {
        self.statuses.push(message.to_string());
    }

    fn line(&mut self, message: &str) {
        self.lines.push(message.to_string());
    }
}
