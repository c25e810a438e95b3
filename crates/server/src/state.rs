//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::gemini::GeminiClient;
use crate::store::{SiteStore, StoreError};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources: the site store, the Gemini client, and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    store: SiteStore,
    gemini: GeminiClient,
}

impl AppState {
    /// Create a new application state.
    ///
    /// Opens the site store under the configured data directory and builds
    /// the Gemini client.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created.
    pub fn new(config: ServerConfig) -> Result<Self, StoreError> {
        let store = SiteStore::open(&config.data_dir)?;
        let gemini = GeminiClient::new(config.gemini());

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                store,
                gemini,
            }),
        })
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Get a reference to the site store.
    #[must_use]
    pub fn store(&self) -> &SiteStore {
        &self.inner.store
    }

    /// Get a reference to the Gemini client.
    #[must_use]
    pub fn gemini(&self) -> &GeminiClient {
        &self.inner.gemini
    }
}
