pub mod error;
pub mod model;
pub mod traits;

pub use error::{CatalogError, Resource, StoreError};
pub use model::installed::InstalledVersion;
pub use model::query::{ServiceQuery, SortKey};
pub use model::service::Service;
pub use model::service_type::{ServiceType, ServiceTypeCode};
pub use traits::version_store::VersionStore;

