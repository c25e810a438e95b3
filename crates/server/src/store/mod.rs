//! Content persistence for the site.
//!
//! # Storage: JSON blobs under the data directory
//!
//! ## Blobs
//!
//! - `jumbo_products.json` - product catalog
//! - `jumbo_blog_posts.json` - blog posts
//! - `jumbo_admins.json` - admin accounts
//! - `jumbo_settings.json` - site settings (singleton)
//!
//! Each blob is read once when [`SiteStore`] opens and rewritten synchronously
//! after every accepted mutation, inside that container's write lock so
//! writes cannot interleave. An absent or corrupt blob falls back to its
//! built-in default instead of failing startup.

pub mod admins;
pub mod blob;
pub mod blog;
pub mod catalog;
pub mod settings;
pub mod site;

use std::path::PathBuf;

use thiserror::Error;

pub use admins::AdminStore;
pub use blob::JsonBlobStore;
pub use blog::BlogStore;
pub use catalog::CatalogStore;
pub use settings::SettingsStore;
pub use site::SiteStore;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The data directory could not be created or accessed.
    #[error("could not prepare data directory {path}: {source}")]
    DataDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing a blob to disk failed.
    #[error("could not write blob {key}: {source}")]
    Write {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// Serializing a container failed.
    #[error("could not encode blob {key}: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., duplicate username, primary admin rules).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Blob names, used as the on-disk file stems.
pub mod keys {
    /// Product catalog.
    pub const PRODUCTS: &str = "jumbo_products";

    /// Blog posts.
    pub const BLOG_POSTS: &str = "jumbo_blog_posts";

    /// Admin accounts.
    pub const ADMINS: &str = "jumbo_admins";

    /// Site settings singleton.
    pub const SETTINGS: &str = "jumbo_settings";
}
