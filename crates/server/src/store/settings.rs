//! Site settings store.
//!
//! Backed by the `jumbo_settings` blob, a singleton rather than a
//! collection. Field-level merge happens at the API boundary; this store
//! persists the replacement value it is given.

use jumbo_meats_core::WebsiteSettings;
use parking_lot::RwLock;

use super::{JsonBlobStore, StoreError, keys};

/// Store for the settings singleton.
pub struct SettingsStore {
    blobs: JsonBlobStore,
    settings: RwLock<WebsiteSettings>,
}

impl SettingsStore {
    /// Load settings from their blob (or the built-in defaults).
    #[must_use]
    pub fn load(blobs: JsonBlobStore) -> Self {
        let settings = blobs.load_or(keys::SETTINGS, crate::defaults::default_settings);
        Self {
            blobs,
            settings: RwLock::new(settings),
        }
    }

    /// The current settings.
    #[must_use]
    pub fn get(&self) -> WebsiteSettings {
        self.settings.read().clone()
    }

    /// Replace the settings and persist them.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if writing the blob fails.
    pub fn update(&self, new_settings: WebsiteSettings) -> Result<WebsiteSettings, StoreError> {
        let mut settings = self.settings.write();
        *settings = new_settings;
        self.blobs.save(keys::SETTINGS, &*settings)?;
        Ok(settings.clone())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_no_blob_exists() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::load(JsonBlobStore::open(dir.path()).unwrap());
        assert_eq!(store.get().name, "Jumbo Meat Suppliers");
    }

    #[test]
    fn test_update_persists_across_reload() {
        let dir = tempfile::tempdir().unwrap();
        let blobs = JsonBlobStore::open(dir.path()).unwrap();

        let store = SettingsStore::load(blobs.clone());
        let mut settings = store.get();
        settings.whatsapp = "263771234567".to_owned();
        store.update(settings.clone()).unwrap();

        let reloaded = SettingsStore::load(blobs);
        assert_eq!(reloaded.get(), settings);
    }
}
