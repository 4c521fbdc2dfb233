pub mod installed;
pub mod query;
pub mod service;
pub mod service_type;
