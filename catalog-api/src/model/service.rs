//! The joined view returned to callers.

use crate::model::installed::InstalledVersion;
use crate::model::service_type::ServiceType;
use serde::{Deserialize, Serialize};

/// A service type together with the version numbers the user has installed.
///
/// Built fresh for every request and never persisted. Serializes flat: the
/// service type fields followed by `versions_in_use`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    #[serde(flatten)]
    service_type: ServiceType,
    versions_in_use: Vec<u32>,
}

impl Service {
    pub fn new(service_type: ServiceType, versions_in_use: Vec<u32>) -> Self {
        Self {
            service_type,
            versions_in_use,
        }
    }

    /// Joins a service type with its installed versions.
    ///
    /// Version numbers keep the order of `installed`.
    pub fn from_installed(service_type: ServiceType, installed: &[InstalledVersion]) -> Self {
        let versions_in_use = installed.iter().map(|v| v.version_number()).collect();
        Self::new(service_type, versions_in_use)
    }

    pub fn service_type(&self) -> &ServiceType {
        &self.service_type
    }

    pub fn versions_in_use(&self) -> &[u32] {
        &self.versions_in_use
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::service_type::ServiceTypeCode;
    use chrono::Utc;

    #[test]
    fn test_from_installed_keeps_lookup_order() {
        let code = ServiceTypeCode::DATABASE;
        let installed = vec![
            InstalledVersion::new(code, 3, Utc::now()),
            InstalledVersion::new(code, 1, Utc::now()),
        ];
        let service = Service::from_installed(ServiceType::default(), &installed);
        assert_eq!(service.versions_in_use(), &[3, 1]);
    }

    #[test]
    fn test_serializes_flat() {
        let service_type = ServiceType::new(ServiceTypeCode::NOTIFICATIONS, "N", "D", vec![1]);
        let value = serde_json::to_value(Service::new(service_type, vec![1])).unwrap();

        assert_eq!(value["type_code"], 5);
        assert_eq!(value["name"], "N");
        assert_eq!(value["description"], "D");
        assert_eq!(value["versions_available"], serde_json::json!([1]));
        assert_eq!(value["versions_in_use"], serde_json::json!([1]));
    }
}
