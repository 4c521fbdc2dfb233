//! The static catalog of every service type the platform offers.

use crate::fs::load_state;
use anyhow::{bail, Context, Result};
use catalog_api::model::service_type::{ServiceType, ServiceTypeCode};
use std::collections::HashMap;
use std::path::Path;

/// An immutable registry of service types, keyed by code.
///
/// Built once at startup and shared read-only, so any number of requests may
/// read it concurrently.
#[derive(Debug, Clone, Default)]
pub struct ServiceTypeRegistry {
    service_types: HashMap<ServiceTypeCode, ServiceType>,
}

impl ServiceTypeRegistry {
    /// Creates a registry from the given service types.
    ///
    /// A later entry replaces an earlier one with the same code.
    pub fn from_types(service_types: impl IntoIterator<Item = ServiceType>) -> Self {
        Self {
            service_types: service_types
                .into_iter()
                .map(|st| (st.type_code(), st))
                .collect(),
        }
    }

    /// The service types offered out of the box.
    pub fn builtin() -> Self {
        Self::from_types([
            ServiceType::new(
                ServiceTypeCode::DATABASE,
                "Database Service",
                "A service for running databases",
                vec![1, 2, 3],
            ),
            ServiceType::new(
                ServiceTypeCode::REPORTING,
                "Reporting Service",
                "A service for running reports",
                vec![55, 7],
            ),
            ServiceType::new(
                ServiceTypeCode::CURRENCY_CONVERSION,
                "Currency Conversion",
                "A service for doing currency conversions",
                vec![1, 2, 3, 4, 5, 6, 7, 8],
            ),
            ServiceType::new(
                ServiceTypeCode::TRANSLATION,
                "Translation service",
                "A service for doing language translations",
                vec![12, 14],
            ),
            ServiceType::new(
                ServiceTypeCode::NOTIFICATIONS,
                "Notifications service",
                "A service sending notifications",
                vec![1],
            ),
        ])
    }

    /// Loads a custom catalog from a JSON array of service types.
    ///
    /// # Arguments
    ///
    /// * `path` - The JSON file to read.
    ///
    /// # Returns
    ///
    /// * `Ok(ServiceTypeRegistry)` if the file parses and every code is valid.
    /// * `Err` if the file cannot be read or parsed, a code is `0`, or a code
    ///   appears twice.
    pub fn load(path: &Path) -> Result<Self> {
        let service_types: Vec<ServiceType> = load_state(path)
            .with_context(|| format!("Failed to load service types from {:?}", path))?;

        let mut registry = Self::default();
        for service_type in service_types {
            let code = service_type.type_code();
            if code.get() == 0 {
                bail!(
                    "Service type {:?} in {:?} uses reserved code 0",
                    service_type.name(),
                    path
                );
            }
            if registry.service_types.insert(code, service_type).is_some() {
                bail!("Duplicate service type code {} in {:?}", code, path);
            }
        }

        Ok(registry)
    }

    /// Returns the service type for `code`, or the zero value when the code is
    /// not registered. Unknown codes are expected and never an error.
    pub fn lookup(&self, code: ServiceTypeCode) -> ServiceType {
        self.service_types.get(&code).cloned().unwrap_or_default()
    }

    pub fn get(&self, code: ServiceTypeCode) -> Option<&ServiceType> {
        self.service_types.get(&code)
    }

    /// Returns every registered service type, in no particular order.
    pub fn all(&self) -> Vec<&ServiceType> {
        self.service_types.values().collect()
    }

    pub fn len(&self) -> usize {
        self.service_types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.service_types.is_empty()
    }
}
