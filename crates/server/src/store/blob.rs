//! JSON blob persistence.
//!
//! The durability layer is deliberately small: one pretty-printed JSON file
//! per named blob, loaded in full and rewritten in full. There is no
//! migration handling and no partial-write recovery.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::StoreError;

/// Load/save of named JSON blobs in a data directory.
#[derive(Debug, Clone)]
pub struct JsonBlobStore {
    dir: PathBuf,
}

impl JsonBlobStore {
    /// Open a blob store rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DataDir`] if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|source| StoreError::DataDir {
            path: dir.clone(),
            source,
        })?;
        Ok(Self { dir })
    }

    /// Load a blob, falling back to `default` when the file is absent or
    /// cannot be decoded.
    ///
    /// Decode failures are logged and the default is used; a corrupt blob
    /// never prevents the site from starting.
    pub fn load_or<T, F>(&self, key: &str, default: F) -> T
    where
        T: DeserializeOwned,
        F: FnOnce() -> T,
    {
        let path = self.path(key);
        let raw = match std::fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(key, "no stored blob, using default");
                return default();
            }
            Err(e) => {
                tracing::warn!(key, error = %e, "could not read blob, using default");
                return default();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, error = %e, "corrupt blob, using default");
                default()
            }
        }
    }

    /// Write a blob to disk.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Encode`] if serialization fails or
    /// [`StoreError::Write`] on filesystem errors.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let encoded = serde_json::to_vec_pretty(value).map_err(|source| StoreError::Encode {
            key: key.to_owned(),
            source,
        })?;

        std::fs::write(self.path(key), encoded).map_err(|source| StoreError::Write {
            key: key.to_owned(),
            source,
        })
    }

    /// Filesystem path backing `key`.
    #[must_use]
    pub fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// The directory this store writes into.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, JsonBlobStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonBlobStore::open(dir.path()).unwrap();
        (dir, store)
    }

    #[test]
    fn test_absent_blob_uses_default() {
        let (_dir, store) = temp_store();
        let value: Vec<String> = store.load_or("missing", || vec!["fallback".to_owned()]);
        assert_eq!(value, vec!["fallback".to_owned()]);
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let (_dir, store) = temp_store();
        let written = vec![1_u32, 2, 3];
        store.save("numbers", &written).unwrap();

        let read: Vec<u32> = store.load_or("numbers", Vec::new);
        assert_eq!(read, written);
    }

    #[test]
    fn test_corrupt_blob_uses_default() {
        let (_dir, store) = temp_store();
        std::fs::write(store.path("broken"), "{not json").unwrap();

        let value: Vec<u32> = store.load_or("broken", || vec![9]);
        assert_eq!(value, vec![9]);
    }

    #[test]
    fn test_wrong_shape_uses_default() {
        let (_dir, store) = temp_store();
        store.save("shape", &"a string").unwrap();

        let value: Vec<u32> = store.load_or("shape", Vec::new);
        assert!(value.is_empty());
    }

    #[test]
    fn test_save_overwrites_previous_value() {
        let (_dir, store) = temp_store();
        store.save("counter", &1_u32).unwrap();
        store.save("counter", &2_u32).unwrap();

        let read: u32 = store.load_or("counter", || 0);
        assert_eq!(read, 2);
    }

    #[test]
    fn test_open_creates_nested_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("deep/data");
        let store = JsonBlobStore::open(&nested).unwrap();
        store.save("probe", &true).unwrap();
        assert!(nested.join("probe.json").exists());
    }
}
