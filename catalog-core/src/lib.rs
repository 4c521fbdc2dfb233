//! # Catalog Core Library
//!
//! The query engine behind the service catalog.
//!
//! ## Modules
//! - `registry`: The immutable catalog of service types.
//! - `engine`: Listing (filter, sort, join, paginate) and detail lookups.
//! - `store`: `VersionStore` backends (in-memory fixture, JSON file).
//! - `fs`: JSON state persistence helpers.

pub mod engine;
pub mod fs;
pub mod registry;
pub mod store;

pub use engine::Catalog;
pub use registry::ServiceTypeRegistry;
