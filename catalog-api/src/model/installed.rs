//! A record that one version of a service type is deployed for the user.

use crate::model::service_type::ServiceTypeCode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Describes a specific version of a service type the user has installed.
///
/// The code is not guaranteed to exist in the registry; readers must tolerate
/// unknown codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstalledVersion {
    service_type: ServiceTypeCode,
    version_number: u32,
    created_at: DateTime<Utc>,
}

impl InstalledVersion {
    pub fn new(
        service_type: ServiceTypeCode,
        version_number: u32,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            service_type,
            version_number,
            created_at,
        }
    }

    pub fn service_type(&self) -> ServiceTypeCode {
        self.service_type
    }

    pub fn version_number(&self) -> u32 {
        self.version_number
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
