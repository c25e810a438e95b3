//! Session-related types for admin authentication.
//!
//! Types stored in the session for authentication state.

use serde::{Deserialize, Serialize};

use jumbo_meats_core::{AdminId, Username};

/// Session-stored admin identity.
///
/// Minimal data stored in the session to identify the logged-in admin.
/// The primary flag is fixed at account creation, so carrying it in the
/// session cannot go stale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentAdmin {
    /// Admin's account ID.
    pub id: AdminId,
    /// Admin's username.
    pub username: Username,
    /// Whether this admin is the primary admin.
    pub is_primary: bool,
}

/// Session keys.
pub mod keys {
    /// Key for storing the current logged-in admin.
    pub const CURRENT_ADMIN: &str = "current_admin";

    /// Key for storing the visitor's shopping basket.
    pub const CART: &str = "cart";
}
