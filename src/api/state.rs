//! Shared application state.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::{Config, DEFAULT_STATIC_DIR};
use crate::store::Store;

/// Application state shared across all handlers.
///
/// Contains the record store wrapped in `Arc<RwLock<>>` for thread-safe access.
#[derive(Clone)]
pub struct AppState {
    /// Users and posts
    pub store: Arc<RwLock<Store>>,
    /// Directory holding the landing page
    pub static_dir: PathBuf,
}

impl AppState {
    /// Creates a new AppState around the given store.
    pub fn new(store: Store) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }

    /// Creates the startup state: sample records plus the configured static directory.
    pub fn from_config(config: &Config) -> Self {
        Self::new(Store::seeded()).with_static_dir(config.static_dir.clone())
    }

    pub fn with_static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = dir.into();
        self
    }
}
