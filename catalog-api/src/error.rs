use crate::model::service_type::ServiceTypeCode;
use std::fmt;
use thiserror::Error;

/// Failures raised by a `VersionStore` backend.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Underlying IO failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing data could not be decoded.
    #[error("Corrupt version store: {0}")]
    Corrupt(String),

    /// The backend could not be reached or refused the query.
    #[error("Version store unavailable: {0}")]
    Unavailable(String),
}

/// What a caller asked for when a lookup came back empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Service(ServiceTypeCode),
    Version {
        service_type: ServiceTypeCode,
        version_number: u32,
    },
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Service(code) => write!(f, "service {}", code),
            Resource::Version {
                service_type,
                version_number,
            } => write!(f, "version {} of service {}", version_number, service_type),
        }
    }
}

/// Errors returned by catalog queries.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Nothing matching is installed. Does not say whether the type is unknown,
    /// uninstalled, or installed without the requested version.
    #[error("{0} not found")]
    NotFound(Resource),

    /// The version store failed; its error is passed through untouched.
    #[error(transparent)]
    Backend(#[from] StoreError),
}

impl CatalogError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound(_))
    }
}
