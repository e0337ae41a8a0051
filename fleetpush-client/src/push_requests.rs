//! Push request endpoints

use crate::PlatformClient;
use crate::error::Result;
use fleetpush_core::domain::push::{PushRequest, PushStatus};
use fleetpush_core::dto::push::{CreatePushRequest, UpdateStatusRequest};
use tracing::debug;
use uuid::Uuid;

impl PlatformClient {
    /// Create a new push request record
    ///
    /// # Arguments
    /// * `req` - The push request creation payload
    ///
    /// # Returns
    /// The created record with its platform-assigned identifier
    pub async fn create_push_request(&self, req: CreatePushRequest) -> Result<PushRequest> {
        let url = format!("{}/api/data/push-requests", self.base_url);
        let response = self.client.post(&url).json(&req).send().await?;

        let created: PushRequest = self.handle_response(response).await?;
        debug!(id = %created.id, "push request created");
        Ok(created)
    }

    /// Get a push request by ID
    ///
    /// # Arguments
    /// * `id` - The push request UUID
    ///
    /// # Returns
    /// The current record snapshot, or `None` if no record matches
    pub async fn get_push_request(&self, id: Uuid) -> Result<Option<PushRequest>> {
        let url = format!("{}/api/data/push-requests/{}", self.base_url, id);
        let response = self.client.get(&url).send().await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        self.handle_response(response).await.map(Some)
    }

    /// Update the status of a push request
    ///
    /// # Arguments
    /// * `id` - The push request UUID
    /// * `status` - The new status
    pub async fn update_push_request_status(&self, id: Uuid, status: PushStatus) -> Result<()> {
        let url = format!("{}/api/data/push-requests/{}/status", self.base_url, id);
        let response = self
            .client
            .put(&url)
            .json(&UpdateStatusRequest { status })
            .send()
            .await?;

        self.handle_empty_response(response).await
    }
}
