//! Package version and subscriber domain types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A released (or beta) version of a package on the platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageVersion {
    pub id: Uuid,
    pub package_id: Uuid,
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub release_state: ReleaseState,
}

impl PackageVersion {
    /// The ordered version triple, used as the ceiling for eligibility
    /// queries (subscribers on a strictly lower version are eligible).
    pub fn number(&self) -> VersionNumber {
        VersionNumber {
            major: self.major,
            minor: self.minor,
            patch: self.patch,
        }
    }
}

/// Release state of a package version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReleaseState {
    Released,
    Beta,
}

/// An ordered major.minor.patch triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VersionNumber {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl std::fmt::Display for VersionNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// An installed instance of the package eligible for upgrade.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscriber {
    /// Tenant organization key.
    pub id: Uuid,
    /// Platform instance the subscriber lives on.
    pub instance: String,
    pub installed_version_id: Option<Uuid>,
}

/// De-duplicated, order-preserving set of subscriber ids.
///
/// The eligibility query can return the same organization more than once
/// (one row per installed prior version); fan-out must target each
/// subscriber exactly once.
#[derive(Debug, Clone, Default)]
pub struct SubscriberSet {
    ids: Vec<Uuid>,
}

impl SubscriberSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect subscriber ids, dropping duplicates while keeping first-seen
    /// order.
    pub fn from_subscribers<'a, I>(subscribers: I) -> Self
    where
        I: IntoIterator<Item = &'a Subscriber>,
    {
        let mut set = Self::new();
        for subscriber in subscribers {
            set.insert(subscriber.id);
        }
        set
    }

    pub fn insert(&mut self, id: Uuid) {
        if !self.ids.contains(&id) {
            self.ids.push(id);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Uuid> {
        self.ids.iter()
    }
}
