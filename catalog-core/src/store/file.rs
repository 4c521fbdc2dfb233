use crate::fs::load_state;
use catalog_api::{InstalledVersion, ServiceTypeCode, StoreError, VersionStore};
use log::debug;
use std::io::ErrorKind;
use std::path::PathBuf;

/// A version store backed by a JSON file holding an array of installed versions.
///
/// The file is re-read on every lookup, so edits made by other tools are
/// picked up without a restart.
#[derive(Debug, Clone)]
pub struct FileVersionStore {
    path: PathBuf,
}

impl FileVersionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_all(&self) -> Result<Vec<InstalledVersion>, StoreError> {
        load_state(&self.path).map_err(|e| match e.kind() {
            ErrorKind::InvalidData | ErrorKind::UnexpectedEof => {
                StoreError::Corrupt(format!("{}: {}", self.path.display(), e))
            }
            _ => StoreError::Io(e),
        })
    }
}

impl VersionStore for FileVersionStore {
    fn installed_versions(
        &self,
        type_code: ServiceTypeCode,
    ) -> Result<Vec<InstalledVersion>, StoreError> {
        let versions: Vec<InstalledVersion> = self
            .read_all()?
            .into_iter()
            .filter(|v| v.service_type() == type_code)
            .collect();

        debug!(
            "{} installed version(s) of service {} in {:?}",
            versions.len(),
            type_code,
            self.path
        );
        Ok(versions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::save_state;
    use chrono::Utc;

    #[test]
    fn test_filters_by_type_code() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("installed.json");
        let now = Utc::now();
        save_state(
            &path,
            &vec![
                InstalledVersion::new(ServiceTypeCode::DATABASE, 3, now),
                InstalledVersion::new(ServiceTypeCode::NOTIFICATIONS, 1, now),
                InstalledVersion::new(ServiceTypeCode::DATABASE, 1, now),
            ],
        )
        .unwrap();

        let store = FileVersionStore::new(&path);
        let db: Vec<u32> = store
            .installed_versions(ServiceTypeCode::DATABASE)
            .unwrap()
            .iter()
            .map(|v| v.version_number())
            .collect();
        assert_eq!(db, vec![3, 1]);
        assert!(store
            .installed_versions(ServiceTypeCode::new(77))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileVersionStore::new(dir.path().join("absent.json"));
        let err = store
            .installed_versions(ServiceTypeCode::DATABASE)
            .unwrap_err();
        assert!(matches!(err, StoreError::Io(_)));
    }

    #[test]
    fn test_malformed_file_is_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("installed.json");
        std::fs::write(&path, r#"[{"service_type": "one"}]"#).unwrap();

        let err = FileVersionStore::new(&path)
            .installed_versions(ServiceTypeCode::DATABASE)
            .unwrap_err();
        assert!(matches!(err, StoreError::Corrupt(_)));
    }
}
