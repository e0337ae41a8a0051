//! Push request and push job domain types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A push request: one scheduled or triggered package upgrade campaign.
///
/// Created by the CLI, then owned by the platform. Terminal statuses are
/// assigned remote-side only; the client never writes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushRequest {
    pub id: Uuid,
    pub package_version_id: Uuid,
    pub scheduled_start_time: Option<DateTime<Utc>>,
    pub status: PushStatus,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub duration_seconds: Option<i64>,
}

/// A per-subscriber unit of work under a push request.
///
/// Immutable from the client's perspective once created; the platform
/// transitions its status as the upgrade runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushJob {
    pub id: Uuid,
    pub push_request_id: Uuid,
    pub subscriber_id: Uuid,
    pub status: PushStatus,
}

/// Status shared by push requests and push jobs.
///
/// The platform serializes `InProgress` as the string "In Progress".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PushStatus {
    Created,
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Succeeded,
    Failed,
    Canceled,
}

impl PushStatus {
    /// True once no further status transitions can occur.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            PushStatus::Succeeded | PushStatus::Failed | PushStatus::Canceled
        )
    }
}

impl std::fmt::Display for PushStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PushStatus::Created => write!(f, "Created"),
            PushStatus::Pending => write!(f, "Pending"),
            PushStatus::InProgress => write!(f, "In Progress"),
            PushStatus::Succeeded => write!(f, "Succeeded"),
            PushStatus::Failed => write!(f, "Failed"),
            PushStatus::Canceled => write!(f, "Canceled"),
        }
    }
}
