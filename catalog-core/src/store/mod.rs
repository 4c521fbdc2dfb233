//! Backends answering "which versions of this service type are installed".

pub mod file;
pub mod memory;

pub use file::FileVersionStore;
pub use memory::MemoryVersionStore;
