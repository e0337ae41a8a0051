//! Fleetpush HTTP Client
//!
//! A simple, type-safe HTTP client for the multi-tenant platform data API.
//!
//! This crate provides the data-access boundary the push flows depend on:
//! a concrete [`PlatformClient`] over HTTP and the [`DataApi`] trait the
//! flows are written against, so tests can substitute a fake.
//!
//! # Example
//!
//! ```no_run
//! use fleetpush_client::PlatformClient;
//! use fleetpush_core::dto::push::CreatePushRequest;
//! use uuid::Uuid;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), fleetpush_client::ClientError> {
//!     let client = PlatformClient::new("http://localhost:8080");
//!
//!     let request = client.create_push_request(CreatePushRequest {
//!         package_version_id: Uuid::new_v4(),
//!         scheduled_start_time: None,
//!     }).await?;
//!
//!     println!("Created push request: {}", request.id);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod error;
mod packages;
mod push_jobs;
mod push_requests;

// Re-export commonly used types
pub use api::DataApi;
pub use error::{ClientError, Result};

use reqwest::Client;
use serde::de::DeserializeOwned;

/// HTTP client for the platform data API
///
/// Endpoint methods are organized into logical groups:
/// - Push request lifecycle (create, get, status update)
/// - Push job fan-out (batched create, list by request)
/// - Package version resolution and subscriber eligibility
#[derive(Debug, Clone)]
pub struct PlatformClient {
    /// Base URL of the platform (e.g., "http://localhost:8080")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl PlatformClient {
    /// Create a new platform client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the platform data API
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Create a new platform client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Get the base URL of the platform
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// Checks the status code and returns an appropriate error if the
    /// request failed, or deserializes the response body if successful.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }

    /// Handle an API response that returns no content (e.g., status updates)
    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<()> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        Ok(())
    }
}
