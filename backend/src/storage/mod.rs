//! Persistence layer
//!
//! The store is an injected collaborator exposing whole-structure load and
//! save; handlers never touch the filesystem directly. No partial updates
//! and no transactions; every write replaces the entire state.

use anyhow::Result;
use async_trait::async_trait;
use metabolic_trend_shared::models::MetabolicData;

mod json_store;

pub use json_store::JsonFileStore;

/// Whole-state persistence collaborator
#[async_trait]
pub trait MetabolicStore: Send + Sync {
    /// Load the entire persisted state. A missing data file is an empty
    /// state, not an error.
    async fn load(&self) -> Result<MetabolicData>;

    /// Replace the entire persisted state, all-or-nothing.
    async fn save(&self, data: &MetabolicData) -> Result<()>;
}
