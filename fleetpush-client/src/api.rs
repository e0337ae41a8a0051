//! Injected data-access boundary
//!
//! The push flows are written against this trait rather than the concrete
//! HTTP client, so tests can substitute a scripted fake with no network.

use async_trait::async_trait;
use uuid::Uuid;

use crate::PlatformClient;
use crate::error::Result;
use fleetpush_core::domain::package::{PackageVersion, Subscriber, VersionNumber};
use fleetpush_core::domain::push::{PushJob, PushRequest, PushStatus};
use fleetpush_core::dto::push::{CreatePushJob, CreatePushRequest, SaveResult};

/// Remote data-access capability the flows depend on: point lookup,
/// eligibility query, batched create, single-record update.
#[async_trait]
pub trait DataApi: Send + Sync {
    /// Point lookup of a push request; `None` when no record matches.
    async fn get_push_request(&self, id: Uuid) -> Result<Option<PushRequest>>;

    /// Resolve the released baseline for a package version.
    async fn current_package_version(
        &self,
        package_version_id: Uuid,
    ) -> Result<Option<PackageVersion>>;

    /// Subscribers on a released version strictly below `below`, optionally
    /// narrowed by a platform-dialect filter expression.
    async fn eligible_subscribers(
        &self,
        package_id: Uuid,
        below: VersionNumber,
        filter: Option<&str>,
    ) -> Result<Vec<Subscriber>>;

    /// Create one push request record.
    async fn create_push_request(&self, req: CreatePushRequest) -> Result<PushRequest>;

    /// Batched push-job create; one result per submitted record.
    async fn create_push_jobs(&self, jobs: Vec<CreatePushJob>) -> Result<Vec<SaveResult>>;

    /// Transition the status of an existing push request.
    async fn update_push_request_status(&self, id: Uuid, status: PushStatus) -> Result<()>;

    /// All push jobs under a push request.
    async fn list_push_jobs(&self, push_request_id: Uuid) -> Result<Vec<PushJob>>;
}

#[async_trait]
impl DataApi for PlatformClient {
    async fn get_push_request(&self, id: Uuid) -> Result<Option<PushRequest>> {
        PlatformClient::get_push_request(self, id).await
    }

    async fn current_package_version(
        &self,
        package_version_id: Uuid,
    ) -> Result<Option<PackageVersion>> {
        PlatformClient::current_package_version(self, package_version_id).await
    }

    async fn eligible_subscribers(
        &self,
        package_id: Uuid,
        below: VersionNumber,
        filter: Option<&str>,
    ) -> Result<Vec<Subscriber>> {
        PlatformClient::eligible_subscribers(self, package_id, below, filter).await
    }

    async fn create_push_request(&self, req: CreatePushRequest) -> Result<PushRequest> {
        PlatformClient::create_push_request(self, req).await
    }

    async fn create_push_jobs(&self, jobs: Vec<CreatePushJob>) -> Result<Vec<SaveResult>> {
        PlatformClient::create_push_jobs(self, jobs).await
    }

    async fn update_push_request_status(&self, id: Uuid, status: PushStatus) -> Result<()> {
        PlatformClient::update_push_request_status(self, id, status).await
    }

    async fn list_push_jobs(&self, push_request_id: Uuid) -> Result<Vec<PushJob>> {
        PlatformClient::list_push_jobs(self, push_request_id).await
    }
}
