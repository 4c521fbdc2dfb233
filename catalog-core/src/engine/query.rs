use super::Catalog;
use catalog_api::{CatalogError, Service, ServiceQuery, ServiceType, SortKey};
use log::debug;

/// Keeps the service types whose name, description or code contains `search`.
///
/// An empty search keeps everything.
pub fn filter_service_types(search: &str, service_types: Vec<ServiceType>) -> Vec<ServiceType> {
    service_types
        .into_iter()
        .filter(|st| st.matches(search))
        .collect()
}

/// Orders service types by the requested field.
pub fn sort_service_types(sort: SortKey, mut service_types: Vec<ServiceType>) -> Vec<ServiceType> {
    match sort {
        SortKey::Name => service_types.sort_by(|a, b| a.name().cmp(b.name())),
        SortKey::Description => {
            service_types.sort_by(|a, b| a.description().cmp(b.description()))
        }
        SortKey::TypeCode => service_types.sort_by_key(|st| st.type_code()),
    }
    service_types
}

/// Returns one page of `items`.
///
/// A `page` below 1 is read as 1. A `page_size` below 1 disables pagination
/// and returns everything. A page that starts past the end is empty.
pub fn paginate<T>(page: i64, page_size: i64, items: Vec<T>) -> Vec<T> {
    let page = page.max(1);
    if page_size < 1 {
        return items;
    }

    let page_size = usize::try_from(page_size).unwrap_or(usize::MAX);
    let pages_before = usize::try_from(page - 1).unwrap_or(usize::MAX);
    let start = page_size.saturating_mul(pages_before);

    items.into_iter().skip(start).take(page_size).collect()
}

impl Catalog {
    /// Lists the services the user has installed, filtered, sorted and paged
    /// according to `query`.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<Service>)` in sort order. Service types with no installed
    ///   version are left out.
    /// * `Err(CatalogError::Backend)` as soon as one lookup fails. No partial
    ///   result is returned.
    pub fn list_services(&self, query: &ServiceQuery) -> Result<Vec<Service>, CatalogError> {
        let matched = filter_service_types(&query.search, self.service_types());
        debug!(
            "{} service type(s) match search {:?}",
            matched.len(),
            query.search
        );

        let sorted = sort_service_types(query.sort, matched);
        let in_use = self.in_use_services(sorted)?;
        debug!("{} service(s) in use, sorted by {}", in_use.len(), query.sort);

        Ok(paginate(query.page, query.page_size, in_use))
    }

    /// Joins each service type with its installed versions, dropping the ones
    /// the user has nothing installed for.
    fn in_use_services(&self, service_types: Vec<ServiceType>) -> Result<Vec<Service>, CatalogError> {
        let mut services = Vec::with_capacity(service_types.len());

        for service_type in service_types {
            let installed = self.store.installed_versions(service_type.type_code())?;
            if installed.is_empty() {
                continue;
            }
            services.push(Service::from_installed(service_type, &installed));
        }

        Ok(services)
    }
}
