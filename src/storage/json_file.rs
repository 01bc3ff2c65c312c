//! Ledger persisted as a JSON document on disk
//!
//! Saves go through a uniquely named temp file in the ledger's directory that
//! is renamed over the target, so a reader never sees half a ledger. The file
//! is single-writer: [`crate::service::LedgerService`] serializes updates
//! within one process only, and two processes updating the same file can
//! still lose one another's changes.

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

use super::trait_def::LedgerStore;
use crate::models::{CountryVisit, LedgerDocument};

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

    fn directory(&self) -> PathBuf {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }
}

fn write_atomically(dir: &Path, target: &Path, json: &[u8]) -> Result<()> {
    let mut temp = NamedTempFile::new_in(dir)
        .with_context(|| format!("failed to create temp file in {}", dir.display()))?;
    temp.write_all(json)
        .and_then(|_| temp.as_file().sync_all())
        .with_context(|| format!("failed to write {}", temp.path().display()))?;
    temp.persist(target)
        .map_err(|e| e.error)
        .with_context(|| format!("failed to replace {}", target.display()))?;
    Ok(())
}

#[async_trait]
impl LedgerStore for JsonFileStore {
    async fn load(&self) -> Result<Vec<CountryVisit>> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No ledger at {}, starting empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(e).with_context(|| format!("failed to read {}", self.path.display()))
            }
        };

        let document: LedgerDocument = serde_json::from_str(&raw)
            .with_context(|| format!("invalid ledger file {}", self.path.display()))?;
        let visits = document
            .into_visits()
            .with_context(|| format!("invalid ledger file {}", self.path.display()))?;
        debug!("Loaded {} visits from {}", visits.len(), self.path.display());
        Ok(visits)
    }

    async fn save(&self, visits: &[CountryVisit]) -> Result<()> {
        let document = LedgerDocument {
            visits: visits.to_vec(),
        };
        let json = serde_json::to_string_pretty(&document)?;

        let dir = self.directory();
        tokio::fs::create_dir_all(&dir)
            .await
            .with_context(|| format!("failed to create {}", dir.display()))?;

        let target = self.path.clone();
        tokio::task::spawn_blocking(move || write_atomically(&dir, &target, json.as_bytes()))
            .await
            .context("ledger write task failed")??;

        debug!("Saved {} visits to {}", visits.len(), self.path.display());
        Ok(())
    }
}
