//! Authentication service.
//!
//! Handles admin registration, login, and the approval workflow. Passwords
//! are hashed with Argon2id and never stored or compared in plain text.

mod error;

pub use error::AuthError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use jumbo_meats_core::{AdminAccount, Username};

use crate::store::{AdminStore, StoreError};

/// Minimum password length.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Authentication service.
///
/// Registration applies the bootstrap rule: the first account ever created
/// becomes the approved primary admin, every later account starts out
/// unapproved and must be approved before it can log in.
pub struct AuthService<'a> {
    admins: &'a AdminStore,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(admins: &'a AdminStore) -> Self {
        Self { admins }
    }

    /// Register a new admin account with username and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidUsername` if the username is empty or too long.
    /// Returns `AuthError::WeakPassword` if the password doesn't meet requirements.
    /// Returns `AuthError::DuplicateUsername` if the username is already taken.
    pub fn register(&self, username: &str, password: &str) -> Result<AdminAccount, AuthError> {
        // Validate username
        let username = Username::parse(username)?;

        // Validate password
        validate_password(password)?;

        // Hash password
        let password_hash = hash_password(password)?;

        // Create account
        let account = self
            .admins
            .register(username, password_hash)
            .map_err(|e| match e {
                StoreError::Conflict(_) => AuthError::DuplicateUsername,
                other => AuthError::Store(other),
            })?;

        Ok(account)
    }

    /// Login with username and password.
    ///
    /// Credentials are always verified before the approval status is
    /// consulted, so a wrong password never reveals whether an account
    /// is pending.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the username/password is wrong.
    /// Returns `AuthError::PendingApproval` if the account isn't approved yet.
    pub fn login(&self, username: &str, password: &str) -> Result<AdminAccount, AuthError> {
        // Validate username format
        let username = Username::parse(username)?;

        // Look up the account
        let account = self
            .admins
            .find_by_username(&username)
            .ok_or(AuthError::InvalidCredentials)?;

        // Verify password
        verify_password(password, &account.password_hash)?;

        // Check approval
        if !account.is_approved {
            return Err(AuthError::PendingApproval);
        }

        Ok(account)
    }
}

/// Validate password meets requirements.
fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    Ok(())
}

/// Hash a password using Argon2id.
fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a hash.
fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    use crate::store::JsonBlobStore;

    fn admin_store() -> (tempfile::TempDir, AdminStore) {
        let dir = tempfile::tempdir().unwrap();
        let blobs = JsonBlobStore::open(dir.path()).unwrap();
        let admins = AdminStore::load(blobs);
        (dir, admins)
    }

    #[test]
    fn register_hashes_the_password() {
        let (_dir, admins) = admin_store();
        let auth = AuthService::new(&admins);

        let account = auth.register("owner", "super-secret").unwrap();

        assert_ne!(account.password_hash, "super-secret");
        assert!(account.password_hash.starts_with("$argon2"));
    }

    #[test]
    fn login_succeeds_with_correct_password() {
        let (_dir, admins) = admin_store();
        let auth = AuthService::new(&admins);

        auth.register("owner", "super-secret").unwrap();
        let account = auth.login("owner", "super-secret").unwrap();

        assert_eq!(account.username.as_str(), "owner");
    }

    #[test]
    fn login_rejects_wrong_password() {
        let (_dir, admins) = admin_store();
        let auth = AuthService::new(&admins);

        auth.register("owner", "super-secret").unwrap();
        let err = auth.login("owner", "wrong-password").unwrap_err();

        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[test]
    fn login_rejects_unknown_username() {
        let (_dir, admins) = admin_store();
        let auth = AuthService::new(&admins);

        let err = auth.login("nobody", "super-secret").unwrap_err();

        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[test]
    fn unapproved_account_is_told_it_is_pending() {
        let (_dir, admins) = admin_store();
        let auth = AuthService::new(&admins);

        auth.register("owner", "super-secret").unwrap();
        auth.register("clerk", "other-secret").unwrap();

        let err = auth.login("clerk", "other-secret").unwrap_err();
        assert!(matches!(err, AuthError::PendingApproval));
    }

    #[test]
    fn wrong_password_on_pending_account_stays_invalid_credentials() {
        let (_dir, admins) = admin_store();
        let auth = AuthService::new(&admins);

        auth.register("owner", "super-secret").unwrap();
        auth.register("clerk", "other-secret").unwrap();

        let err = auth.login("clerk", "bad-guess").unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[test]
    fn short_password_is_rejected() {
        let (_dir, admins) = admin_store();
        let auth = AuthService::new(&admins);

        let err = auth.register("owner", "short").unwrap_err();
        assert!(matches!(err, AuthError::WeakPassword(_)));
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let (_dir, admins) = admin_store();
        let auth = AuthService::new(&admins);

        auth.register("owner", "super-secret").unwrap();
        let err = auth.register("owner", "another-pass").unwrap_err();

        assert!(matches!(err, AuthError::DuplicateUsername));
    }
}
