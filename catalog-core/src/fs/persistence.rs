use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// Saves a serializable object to a file atomically.
///
/// Writes to a sibling temporary file first and then renames it over the
/// target, so readers never observe a half-written file.
///
/// # Arguments
///
/// * `path` - The target file path.
/// * `state` - The object to serialize and save.
///
/// # Returns
///
/// * `Ok(())` on success.
/// * `Err` on serialization or IO failure.
pub fn save_state<T: Serialize>(path: &Path, state: &T) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(state)?;

    let temp_path = path.with_extension("tmp");
    let mut temp_file = std::fs::File::create(&temp_path)?;
    temp_file.write_all(json.as_bytes())?;
    temp_file.sync_all()?;

    std::fs::rename(&temp_path, path)
}

/// Loads a deserializable object from a JSON file.
///
/// # Returns
///
/// * `Ok(T)` containing the deserialized object.
/// * `Err` with kind `InvalidData` when the content does not decode, or the
///   underlying IO error when the file cannot be read.
pub fn load_state<T: DeserializeOwned>(path: &Path) -> std::io::Result<T> {
    let file = std::fs::File::open(path)?;
    let reader = std::io::BufReader::new(file);
    let state = serde_json::from_reader(reader)?;
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("state.json");

        let mut state = HashMap::new();
        state.insert("versions".to_string(), vec![1u32, 3]);
        save_state(&path, &state).unwrap();

        let loaded: HashMap<String, Vec<u32>> = load_state(&path).unwrap();
        assert_eq!(loaded, state);
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn test_load_garbage_is_invalid_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = load_state::<Vec<u32>>(&path).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    }
}
