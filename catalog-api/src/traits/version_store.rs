//! Defines the `VersionStore` trait for reading installed service versions.
//!
//! The catalog never writes installs; it only asks a store which versions of a
//! service type the user currently runs. Any backing technology (in-memory
//! fixture, file, database) satisfies the same contract.

use crate::error::StoreError;
use crate::model::installed::InstalledVersion;
use crate::model::service_type::ServiceTypeCode;

/// A source of installed versions, keyed by service type code.
///
/// # Examples
///
/// ```
/// use catalog_api::{InstalledVersion, ServiceTypeCode, StoreError, VersionStore};
///
/// struct NothingInstalled;
///
/// impl VersionStore for NothingInstalled {
///     fn installed_versions(
///         &self,
///         _type_code: ServiceTypeCode,
///     ) -> Result<Vec<InstalledVersion>, StoreError> {
///         Ok(Vec::new())
///     }
/// }
/// ```
pub trait VersionStore: Send + Sync {
    /// Lists the versions installed for `type_code`, in no particular order.
    ///
    /// # Returns
    ///
    /// * `Ok(vec![])` when nothing is installed, including for codes the
    ///   registry does not know. Absence is never an error.
    /// * `Err(StoreError)` only when the backend itself failed.
    fn installed_versions(
        &self,
        type_code: ServiceTypeCode,
    ) -> Result<Vec<InstalledVersion>, StoreError>;
}

impl VersionStore for Box<dyn VersionStore> {
    fn installed_versions(
        &self,
        type_code: ServiceTypeCode,
    ) -> Result<Vec<InstalledVersion>, StoreError> {
        (**self).installed_versions(type_code)
    }
}
