//! Package version and subscriber eligibility endpoints

use crate::PlatformClient;
use crate::error::Result;
use fleetpush_core::domain::package::{PackageVersion, Subscriber, VersionNumber};
use uuid::Uuid;

impl PlatformClient {
    /// Resolve the released baseline for a package version
    ///
    /// Returns the highest released version of the package the given
    /// version id belongs to, or `None` when the id does not resolve to a
    /// released version.
    ///
    /// # Arguments
    /// * `package_version_id` - The target package version UUID
    pub async fn current_package_version(
        &self,
        package_version_id: Uuid,
    ) -> Result<Option<PackageVersion>> {
        let url = format!(
            "{}/api/data/package-versions/{}/current",
            self.base_url, package_version_id
        );
        let response = self.client.get(&url).send().await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        self.handle_response(response).await.map(Some)
    }

    /// List subscribers eligible for upgrade to a package version
    ///
    /// Eligibility means the subscriber has a released version strictly
    /// below `below` installed. `filter` is an opaque boolean expression in
    /// the platform query dialect, evaluated server-side.
    ///
    /// # Arguments
    /// * `package_id` - The owning package UUID
    /// * `below` - Version ceiling; only lower installed versions qualify
    /// * `filter` - Optional caller-supplied narrowing expression
    pub async fn eligible_subscribers(
        &self,
        package_id: Uuid,
        below: VersionNumber,
        filter: Option<&str>,
    ) -> Result<Vec<Subscriber>> {
        let url = format!("{}/api/data/packages/{}/subscribers", self.base_url, package_id);

        let mut query = vec![("below", below.to_string())];
        if let Some(filter) = filter {
            query.push(("filter", filter.to_string()));
        }

        let response = self.client.get(&url).query(&query).send().await?;

        self.handle_response(response).await
    }
}
