//! Push job endpoints

use crate::PlatformClient;
use crate::error::Result;
use fleetpush_core::domain::push::PushJob;
use fleetpush_core::dto::push::{CreatePushJob, SaveResult};
use tracing::debug;
use uuid::Uuid;

impl PlatformClient {
    /// Create push jobs in a single batched mutation
    ///
    /// The platform reports one [`SaveResult`] per submitted record, in
    /// order; the batch can partially succeed.
    ///
    /// # Arguments
    /// * `jobs` - One create row per target subscriber
    pub async fn create_push_jobs(&self, jobs: Vec<CreatePushJob>) -> Result<Vec<SaveResult>> {
        if jobs.is_empty() {
            return Ok(Vec::new());
        }

        let url = format!("{}/api/data/push-jobs/batch", self.base_url);
        debug!(count = jobs.len(), "creating push jobs");
        let response = self.client.post(&url).json(&jobs).send().await?;

        self.handle_response(response).await
    }

    /// List all push jobs under a push request
    ///
    /// # Arguments
    /// * `push_request_id` - The owning push request UUID
    pub async fn list_push_jobs(&self, push_request_id: Uuid) -> Result<Vec<PushJob>> {
        let url = format!("{}/api/data/push-jobs", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("request", push_request_id.to_string())])
            .send()
            .await?;

        self.handle_response(response).await
    }
}
