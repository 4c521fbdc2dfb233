use crate::config::{ServerConfig, StoreKind};
use anyhow::{Context, Result};
use catalog_api::VersionStore;
use catalog_core::store::{FileVersionStore, MemoryVersionStore};
use catalog_core::{Catalog, ServiceTypeRegistry};
use log::info;
use std::sync::Arc;

// App State
#[derive(Clone)]
pub struct AppState {
    catalog: Arc<Catalog>,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    /// Builds the registry and version store described by `config`.
    pub fn from_config(config: &ServerConfig) -> Result<Self> {
        let registry = match &config.catalog_path {
            Some(path) => {
                info!("Loading service types from {:?}", path);
                ServiceTypeRegistry::load(path)?
            }
            None => ServiceTypeRegistry::builtin(),
        };
        info!("Registry holds {} service types", registry.len());

        let store: Box<dyn VersionStore> = match config.store {
            StoreKind::Memory => {
                info!("Using in-memory version store fixture");
                Box::new(MemoryVersionStore::fixture())
            }
            StoreKind::File => {
                let path = config
                    .versions_path
                    .clone()
                    .context("File version store requires versions_path")?;
                info!("Reading installed versions from {:?}", path);
                Box::new(FileVersionStore::new(path))
            }
        };

        Ok(Self::new(Catalog::new(Arc::new(registry), store)))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}
