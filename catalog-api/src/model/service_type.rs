//! Defines the service types a user can install and manage.
//!
//! A service type is pure metadata: its identity is a small numeric code and it
//! lists which versions exist. Whether a user actually runs any of them is a
//! separate concern answered by a [`VersionStore`](crate::traits::version_store::VersionStore).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique, stable code identifying a kind of service.
///
/// Codes are assigned by hand and never reused. `0` is reserved for the zero
/// value returned when a code is not registered.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ServiceTypeCode(u32);

impl ServiceTypeCode {
    pub const DATABASE: ServiceTypeCode = ServiceTypeCode(1);
    pub const REPORTING: ServiceTypeCode = ServiceTypeCode(2);
    pub const CURRENCY_CONVERSION: ServiceTypeCode = ServiceTypeCode(3);
    pub const TRANSLATION: ServiceTypeCode = ServiceTypeCode(4);
    pub const NOTIFICATIONS: ServiceTypeCode = ServiceTypeCode(5);

    pub const fn new(code: u32) -> Self {
        Self(code)
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl From<u32> for ServiceTypeCode {
    fn from(code: u32) -> Self {
        Self(code)
    }
}

impl fmt::Display for ServiceTypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Describes a service type a user can create and manage.
///
/// `Default` yields the zero value: code `0`, empty strings and no versions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceType {
    type_code: ServiceTypeCode,
    name: String,
    description: String,
    /// Versions published for this type. Informational only, this is not the
    /// installed set.
    versions_available: Vec<u32>,
}

impl ServiceType {
    /// Creates a new ServiceType.
    ///
    /// # Arguments
    ///
    /// * `type_code` - The unique code of the type.
    /// * `name` - Display name (e.g. "Database Service").
    /// * `description` - Human-readable description.
    /// * `versions_available` - Every version number published for this type.
    ///
    /// # Returns
    ///
    /// A new `ServiceType` instance.
    pub fn new(
        type_code: ServiceTypeCode,
        name: impl Into<String>,
        description: impl Into<String>,
        versions_available: Vec<u32>,
    ) -> Self {
        Self {
            type_code,
            name: name.into(),
            description: description.into(),
            versions_available,
        }
    }

    pub fn type_code(&self) -> ServiceTypeCode {
        self.type_code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn versions_available(&self) -> &[u32] {
        &self.versions_available
    }

    /// Whether `search` occurs in the name, the description or the decimal
    /// form of the code. Matching is case-sensitive and an empty search
    /// matches everything.
    pub fn matches(&self, search: &str) -> bool {
        search.is_empty()
            || self.name.contains(search)
            || self.description.contains(search)
            || self.type_code.to_string().contains(search)
    }
}
