use catalog_api::{InstalledVersion, ServiceTypeCode, StoreError, VersionStore};
use chrono::Utc;
use std::collections::HashMap;

/// An in-memory version store.
///
/// Meant for tests and demos; the data lives for the lifetime of the value.
#[derive(Debug, Clone, Default)]
pub struct MemoryVersionStore {
    versions: HashMap<ServiceTypeCode, Vec<InstalledVersion>>,
}

impl MemoryVersionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the default user's installs.
    ///
    /// Database runs versions 1 and 3, Currency Conversion runs 5 and
    /// Notifications runs 1. Reporting and Translation are available but not
    /// installed.
    pub fn fixture() -> Self {
        let now = Utc::now();
        let mut store = Self::new();
        store.insert(InstalledVersion::new(ServiceTypeCode::DATABASE, 1, now));
        store.insert(InstalledVersion::new(ServiceTypeCode::DATABASE, 3, now));
        store.insert(InstalledVersion::new(
            ServiceTypeCode::CURRENCY_CONVERSION,
            5,
            now,
        ));
        store.insert(InstalledVersion::new(ServiceTypeCode::NOTIFICATIONS, 1, now));
        store
    }

    /// Records an installed version, appended after earlier ones of the same type.
    pub fn insert(&mut self, version: InstalledVersion) {
        self.versions
            .entry(version.service_type())
            .or_default()
            .push(version);
    }
}

impl VersionStore for MemoryVersionStore {
    fn installed_versions(
        &self,
        type_code: ServiceTypeCode,
    ) -> Result<Vec<InstalledVersion>, StoreError> {
        Ok(self.versions.get(&type_code).cloned().unwrap_or_default())
    }
}
