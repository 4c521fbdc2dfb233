use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Prefix of the environment variables overriding the config file,
/// e.g. `CATALOG_PORT=9000`.
pub const ENV_PREFIX: &str = "CATALOG";

#[derive(Error, Debug)]
pub enum ServerConfigError {
    #[error("missing port config value")]
    MissingPort,

    #[error("missing versions path config value")]
    MissingVersionsPath,

    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}

/// Which backend answers installed-version lookups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    /// Built-in fixture held in memory.
    #[default]
    Memory,
    /// JSON file read on every lookup.
    File,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,
    pub store: StoreKind,

    /// Installed versions file, required when `store` is `file`.
    pub versions_path: Option<PathBuf>,

    /// Custom service type catalog. The built-in catalog is used when unset.
    pub catalog_path: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            store: StoreKind::Memory,
            versions_path: None,
            catalog_path: None,
        }
    }
}

impl ServerConfig {
    /// Loads the configuration.
    ///
    /// Layers, lowest priority first: built-in defaults, the file at `path`
    /// (optional, format taken from its extension), then `CATALOG_*`
    /// environment variables.
    pub fn load(path: &Path) -> Result<Self, ServerConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Checks the values a running server cannot do without.
    pub fn validate(&self) -> Result<(), ServerConfigError> {
        if self.port == 0 {
            return Err(ServerConfigError::MissingPort);
        }

        if self.store == StoreKind::File {
            let blank = self
                .versions_path
                .as_deref()
                .map_or(true, |p| p.as_os_str().to_string_lossy().trim().is_empty());
            if blank {
                return Err(ServerConfigError::MissingVersionsPath);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.store, StoreKind::Memory);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_port_is_rejected() {
        let config = ServerConfig {
            port: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ServerConfigError::MissingPort)
        ));
    }

    #[test]
    fn test_file_store_needs_versions_path() {
        let mut config = ServerConfig {
            store: StoreKind::File,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ServerConfigError::MissingVersionsPath)
        ));

        config.versions_path = Some(PathBuf::from("  "));
        assert!(config.validate().is_err());

        config.versions_path = Some(PathBuf::from("data/installed_versions.json"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_yaml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(
            &path,
            "port: 9100\nstore: file\nversions_path: /var/lib/catalog/installed.json\n",
        )
        .unwrap();

        let config = ServerConfig::load(&path).unwrap();
        assert_eq!(config.port, 9100);
        assert_eq!(config.store, StoreKind::File);
        assert_eq!(
            config.versions_path,
            Some(PathBuf::from("/var/lib/catalog/installed.json"))
        );
        assert_eq!(config.catalog_path, None);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ServerConfig::load(&dir.path().join("absent.yaml")).unwrap();
        assert_eq!(config.store, StoreKind::Memory);
    }
}
