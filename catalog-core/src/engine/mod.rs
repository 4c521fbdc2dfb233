//! The catalog engine: answers listing and detail queries by joining the
//! service type registry with the user's installed versions.
//!
//! - `query`: filter, sort, join and paginate the whole registry.
//! - `detail`: resolve a single service or version.

use crate::registry::ServiceTypeRegistry;
use catalog_api::{ServiceType, VersionStore};
use std::sync::Arc;

pub mod detail;
pub mod query;

pub use query::{filter_service_types, paginate, sort_service_types};

/// Read-only query engine over a registry and a version store.
///
/// Every call recomputes its answer from the full registry; nothing is cached
/// between requests.
pub struct Catalog {
    registry: Arc<ServiceTypeRegistry>,
    store: Box<dyn VersionStore>,
}

impl Catalog {
    /// Creates a new catalog.
    ///
    /// # Arguments
    ///
    /// * `registry` - The service types on offer, shared read-only.
    /// * `store` - Where installed versions are read from.
    pub fn new(registry: Arc<ServiceTypeRegistry>, store: Box<dyn VersionStore>) -> Self {
        Self { registry, store }
    }

    fn service_types(&self) -> Vec<ServiceType> {
        self.registry.all().into_iter().cloned().collect()
    }
}
