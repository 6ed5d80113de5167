//! File-backed token store used by the member CLI.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::json;

use crate::error::AppError;
use crate::identity::store::TokenStore;

/// Token store persisting a JSON map of context key → token.
///
/// Plays the role a browser's local storage plays for the web client: one
/// file per device, so a new device (or a wiped file) yields fresh,
/// unlinked identities. Writes go through read-modify-write of the whole
/// map; token files hold a handful of entries, contention is not a
/// concern.
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Creates a store backed by the given file. The file is created on
    /// first write; a missing file reads as empty.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> Result<HashMap<String, String>, AppError> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }

        let raw = fs::read_to_string(&self.path).map_err(|e| storage_error(&self.path, e))?;

        serde_json::from_str(&raw).map_err(|e| {
            AppError::internal(
                "Token file is not valid JSON",
                json!({ "path": self.path.display().to_string(), "reason": e.to_string() }),
            )
        })
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.load()?.get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<(), AppError> {
        let mut entries = self.load()?;
        entries.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| storage_error(&self.path, e))?;
        }

        let raw = serde_json::to_string_pretty(&entries)
            .map_err(|e| AppError::internal("Failed to encode token file", json!({ "reason": e.to_string() })))?;

        fs::write(&self.path, raw).map_err(|e| storage_error(&self.path, e))
    }
}

fn storage_error(path: &Path, e: std::io::Error) -> AppError {
    AppError::internal(
        "Token storage unavailable",
        json!({ "path": path.display().to_string(), "reason": e.to_string() }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn temp_store() -> (FileTokenStore, PathBuf) {
        let path = std::env::temp_dir().join(format!("voter-tokens-{}.json", Uuid::new_v4()));
        (FileTokenStore::new(&path), path)
    }

    #[test]
    fn test_missing_file_reads_as_empty() {
        let (store, path) = temp_store();

        assert!(store.get("a|b|c").unwrap().is_none());
        assert!(!path.exists());
    }

    #[test]
    fn test_round_trip_persists_across_instances() {
        let (store, path) = temp_store();

        store.put("wed-club|x7kq2m9f|", "token-1").unwrap();
        store.put("other|code|sem", "token-2").unwrap();

        let reopened = FileTokenStore::new(&path);
        assert_eq!(
            reopened.get("wed-club|x7kq2m9f|").unwrap().as_deref(),
            Some("token-1")
        );
        assert_eq!(
            reopened.get("other|code|sem").unwrap().as_deref(),
            Some("token-2")
        );

        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_corrupt_file_surfaces_error() {
        let (store, path) = temp_store();
        fs::write(&path, "not json").unwrap();

        assert!(store.get("a").is_err());

        fs::remove_file(path).unwrap();
    }
}
