//! The site's durable state, grouped per container.

use std::path::Path;

use super::{AdminStore, BlogStore, CatalogStore, JsonBlobStore, SettingsStore, StoreError};

/// All durable site content: catalog, blog, admin accounts, settings.
///
/// Each container is loaded from its blob exactly once, here, and owns its
/// own lock; there are no cross-container transactions. Carts are session
/// state and never enter this store.
pub struct SiteStore {
    catalog: CatalogStore,
    blog: BlogStore,
    admins: AdminStore,
    settings: SettingsStore,
}

impl SiteStore {
    /// Open the store over `data_dir`, loading every container.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the data directory cannot be prepared.
    /// Unreadable or corrupt blobs fall back to defaults instead of failing.
    pub fn open(data_dir: &Path) -> Result<Self, StoreError> {
        let blobs = JsonBlobStore::open(data_dir)?;
        Ok(Self {
            catalog: CatalogStore::load(blobs.clone()),
            blog: BlogStore::load(blobs.clone()),
            admins: AdminStore::load(blobs.clone()),
            settings: SettingsStore::load(blobs),
        })
    }

    /// The product catalog.
    #[must_use]
    pub const fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    /// The blog post collection.
    #[must_use]
    pub const fn blog(&self) -> &BlogStore {
        &self.blog
    }

    /// The admin account collection.
    #[must_use]
    pub const fn admins(&self) -> &AdminStore {
        &self.admins
    }

    /// The settings singleton.
    #[must_use]
    pub const fn settings(&self) -> &SettingsStore {
        &self.settings
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_open_creates_data_dir_and_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = SiteStore::open(&dir.path().join("data")).unwrap();

        assert!(store.catalog().list().is_empty());
        assert!(store.blog().list().is_empty());
        assert!(store.admins().list().is_empty());
        assert_eq!(store.settings().get().name, "Jumbo Meat Suppliers");
    }
}
