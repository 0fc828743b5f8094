//! Application state management
//!
//! This module provides the shared application state that is passed
//! to all request handlers via Axum's state extraction.
//!
//! # Design Principles
//!
//! 1. **Injected persistence**: handlers see a trait object, never a path
//! 2. **Cheap cloning**: all fields are Arc'd, cloning is O(1)
//! 3. **Immutable after creation**: state is read-only during request handling

use crate::config::AppConfig;
use crate::storage::MetabolicStore;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Persistence collaborator
    pub store: Arc<dyn MetabolicStore>,
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Serializes load-modify-save cycles within this process. The data
    /// file itself carries no lock, so cross-process writers still race;
    /// single-process deployment is the documented operating model.
    write_lock: Arc<Mutex<()>>,
}

impl AppState {
    /// Create a new application state
    pub fn new(store: Arc<dyn MetabolicStore>, config: AppConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Get a reference to the store
    #[inline]
    pub fn store(&self) -> &dyn MetabolicStore {
        self.store.as_ref()
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Acquire the write lock guarding load-modify-save cycles
    pub async fn lock_writes(&self) -> tokio::sync::MutexGuard<'_, ()> {
        self.write_lock.lock().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::JsonFileStore;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_state_clone_is_cheap() {
        // This test ensures our state design allows cheap cloning
        let dir = TempDir::new().unwrap();
        let store = Arc::new(JsonFileStore::new(dir.path().join("data.json")));
        let state = AppState::new(store, AppConfig::default());

        // Clone should be O(1) - just Arc increments
        let cloned = state.clone();
        assert_eq!(cloned.config().server.port, state.config().server.port);
    }

    #[tokio::test]
    async fn test_clones_share_one_write_lock() {
        let dir = TempDir::new().unwrap();
        let store = Arc::new(JsonFileStore::new(dir.path().join("data.json")));
        let state = AppState::new(store, AppConfig::default());
        let cloned = state.clone();

        let guard = state.lock_writes().await;
        // The clone's lock is the same mutex, so try_lock must fail
        assert!(cloned.write_lock.try_lock().is_err());
        drop(guard);
        assert!(cloned.write_lock.try_lock().is_ok());
    }
}
