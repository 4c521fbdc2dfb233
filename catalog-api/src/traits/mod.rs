pub mod version_store;
