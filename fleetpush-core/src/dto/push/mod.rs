//! Push request/job DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::push::PushStatus;

/// Request to create a new push request record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePushRequest {
    pub package_version_id: Uuid,
    pub scheduled_start_time: Option<DateTime<Utc>>,
}

/// One row of a batched push-job create.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePushJob {
    pub push_request_id: Uuid,
    pub subscriber_id: Uuid,
}

/// Status transition on an existing push request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: PushStatus,
}

/// Per-record outcome of a batched create.
///
/// Batches can partially succeed; the platform reports one result per
/// submitted record, in order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveResult {
    pub id: Option<Uuid>,
    pub success: bool,
    #[serde(default)]
    pub errors: Vec<String>,
}

impl SaveResult {
    /// Error messages from a failed record, empty when it succeeded.
    pub fn error_messages(&self) -> &[String] {
        &self.errors
    }
}
