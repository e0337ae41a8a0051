//! Status flow
//!
//! Single point-in-time lookup of a push request. No polling; the snapshot
//! fields come back unmodified.

use fleetpush_client::DataApi;
use fleetpush_core::domain::push::PushRequest;
use uuid::Uuid;

use super::FlowError;

/// Fetch the current snapshot of a push request.
pub async fn lookup(api: &dyn DataApi, push_request_id: Uuid) -> Result<PushRequest, FlowError> {
    api.get_push_request(push_request_id)
        .await?
        .ok_or(FlowError::NotFound(push_request_id))
}
