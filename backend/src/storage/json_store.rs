//! JSON file implementation of the persistence collaborator

use anyhow::{Context, Result};
use async_trait::async_trait;
use metabolic_trend_shared::models::MetabolicData;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

use super::MetabolicStore;

/// Whole-state JSON file store.
///
/// Saves go through a temp file that is fsynced and renamed over the target,
/// so a crash mid-write leaves the previous state intact. Concurrent writers
/// in other processes are not coordinated; callers serialize their own
/// load-modify-save cycles.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut os = self.path.as_os_str().to_os_string();
        os.push(".tmp");
        PathBuf::from(os)
    }
}

#[async_trait]
impl MetabolicStore for JsonFileStore {
    async fn load(&self) -> Result<MetabolicData> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            // No file yet: fresh empty state
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(MetabolicData::default()),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("failed to read data file {}", self.path.display()))
            }
        };

        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse data file {}", self.path.display()))
    }

    async fn save(&self, data: &MetabolicData) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await.with_context(|| {
                    format!("failed to create data directory {}", parent.display())
                })?;
            }
        }

        let json = serde_json::to_string_pretty(data).context("failed to serialize state")?;

        let tmp_path = self.tmp_path();
        let mut file = tokio::fs::File::create(&tmp_path)
            .await
            .with_context(|| format!("failed to create temp file {}", tmp_path.display()))?;
        file.write_all(json.as_bytes()).await?;
        file.sync_all().await?;
        drop(file);

        tokio::fs::rename(&tmp_path, &self.path)
            .await
            .with_context(|| format!("failed to replace data file {}", self.path.display()))?;

        Ok(())
    }
}
