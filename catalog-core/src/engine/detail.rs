use super::Catalog;
use catalog_api::{CatalogError, InstalledVersion, Resource, Service, ServiceTypeCode};

impl Catalog {
    /// Finds a single installed service.
    ///
    /// Metadata comes from the registry, or is the zero value for an
    /// unregistered code.
    ///
    /// # Returns
    ///
    /// * `Ok(Service)` if at least one version is installed.
    /// * `Err(CatalogError::NotFound)` otherwise, whether or not the code is
    ///   registered.
    /// * `Err(CatalogError::Backend)` if the lookup failed.
    pub fn get_service(&self, type_code: ServiceTypeCode) -> Result<Service, CatalogError> {
        let service_type = self.registry.lookup(type_code);
        let installed = self.store.installed_versions(type_code)?;

        if installed.is_empty() {
            return Err(CatalogError::NotFound(Resource::Service(type_code)));
        }

        Ok(Service::from_installed(service_type, &installed))
    }

    /// Lists every installed version of a service type, in store order.
    pub fn list_versions(
        &self,
        type_code: ServiceTypeCode,
    ) -> Result<Vec<InstalledVersion>, CatalogError> {
        let installed = self.store.installed_versions(type_code)?;

        if installed.is_empty() {
            return Err(CatalogError::NotFound(Resource::Service(type_code)));
        }

        Ok(installed)
    }

    /// Finds one installed version of a service type.
    ///
    /// Returns the same `NotFound` whether the type has nothing installed or
    /// only other versions installed.
    pub fn get_version(
        &self,
        type_code: ServiceTypeCode,
        version_number: u32,
    ) -> Result<InstalledVersion, CatalogError> {
        self.store
            .installed_versions(type_code)?
            .into_iter()
            .find(|v| v.version_number() == version_number)
            .ok_or(CatalogError::NotFound(Resource::Version {
                service_type: type_code,
                version_number,
            }))
    }
}
