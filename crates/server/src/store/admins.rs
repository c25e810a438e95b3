//! Admin account store.
//!
//! Backed by the `jumbo_admins` blob. The registration and approval rules
//! live here, under the container's write lock, so the account invariants
//! hold regardless of request interleaving:
//!
//! - usernames are unique
//! - the first account ever registered is approved and primary
//! - at most one account is primary, and it cannot be removed

use jumbo_meats_core::AdminAccount;
use jumbo_meats_core::types::{AdminId, Username};
use parking_lot::RwLock;

use super::{JsonBlobStore, StoreError, keys};

/// Store for admin accounts.
pub struct AdminStore {
    blobs: JsonBlobStore,
    admins: RwLock<Vec<AdminAccount>>,
}

impl AdminStore {
    /// Load accounts from their blob (or an empty collection).
    #[must_use]
    pub fn load(blobs: JsonBlobStore) -> Self {
        let admins = blobs.load_or(keys::ADMINS, Vec::new);
        Self {
            blobs,
            admins: RwLock::new(admins),
        }
    }

    /// All accounts in registration order.
    #[must_use]
    pub fn list(&self) -> Vec<AdminAccount> {
        self.admins.read().clone()
    }

    /// Look up an account by id.
    #[must_use]
    pub fn find(&self, id: AdminId) -> Option<AdminAccount> {
        self.admins.read().iter().find(|a| a.id == id).cloned()
    }

    /// Look up an account by username.
    #[must_use]
    pub fn find_by_username(&self, username: &Username) -> Option<AdminAccount> {
        self.admins
            .read()
            .iter()
            .find(|a| &a.username == username)
            .cloned()
    }

    /// Register a new account and persist the collection.
    ///
    /// The first registration ever becomes approved and primary; all later
    /// ones start unapproved and non-primary.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Conflict`] when the username is taken, or a
    /// write error.
    pub fn register(
        &self,
        username: Username,
        password_hash: String,
    ) -> Result<AdminAccount, StoreError> {
        let mut admins = self.admins.write();

        if admins.iter().any(|a| a.username == username) {
            return Err(StoreError::Conflict(format!(
                "username '{username}' is already registered"
            )));
        }

        let is_first = admins.is_empty();
        let account = AdminAccount::new(username, password_hash, is_first, is_first);
        admins.push(account.clone());

        self.blobs.save(keys::ADMINS, &*admins)?;
        Ok(account)
    }

    /// Mark an account approved and persist the collection.
    ///
    /// Approving an already-approved account is a no-op that still returns
    /// the account.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] for an unknown id, or a write error.
    pub fn approve(&self, id: AdminId) -> Result<AdminAccount, StoreError> {
        let mut admins = self.admins.write();
        let account = admins
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(StoreError::NotFound)?;

        account.is_approved = true;
        let approved = account.clone();

        self.blobs.save(keys::ADMINS, &*admins)?;
        Ok(approved)
    }

    /// Remove a non-primary account and persist the collection.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Conflict`] for the primary account,
    /// [`StoreError::NotFound`] for an unknown id, or a write error.
    pub fn remove(&self, id: AdminId) -> Result<(), StoreError> {
        let mut admins = self.admins.write();

        let account = admins
            .iter()
            .find(|a| a.id == id)
            .ok_or(StoreError::NotFound)?;
        if account.is_primary {
            return Err(StoreError::Conflict(
                "the primary admin account cannot be removed".to_owned(),
            ));
        }

        admins.retain(|a| a.id != id);
        self.blobs.save(keys::ADMINS, &*admins)
    }
}
