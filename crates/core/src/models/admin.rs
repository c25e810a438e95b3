//! Admin account model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{AdminId, Username};

/// A back-office account.
///
/// The first account ever registered becomes the primary admin: approved
/// immediately and granted exclusive rights over site settings and account
/// management. Later registrants start unapproved and cannot log in until the
/// primary admin approves them.
///
/// `password_hash` holds an argon2 PHC string, never the password itself.
/// API layers must not serialize this struct directly; see the admin routes
/// for the public view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdminAccount {
    pub id: AdminId,
    pub username: Username,
    pub password_hash: String,
    pub is_approved: bool,
    pub is_primary: bool,
    pub created_at: DateTime<Utc>,
}

impl AdminAccount {
    /// Create an account with a fresh identifier, created now.
    #[must_use]
    pub fn new(username: Username, password_hash: String, is_approved: bool, is_primary: bool) -> Self {
        Self {
            id: AdminId::generate(),
            username,
            password_hash,
            is_approved,
            is_primary,
            created_at: Utc::now(),
        }
    }
}
