//! Ledger read-modify-write cycles over a store
//!
//! The core ledger functions are pure. This service is the caller side: it
//! loads the current snapshot, plans or removes records, and saves the new
//! snapshot, holding a lock across the whole cycle so concurrent requests
//! against the same store cannot interleave.

use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::info;

use crate::ledger::{self, IdGenerator, PlanError, VisitRequest};
use crate::models::{CountryVisit, VisitId};
use crate::storage::LedgerStore;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Plan(#[from] PlanError),
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

pub struct LedgerService {
    store: Arc<dyn LedgerStore>,
    ids: Arc<dyn IdGenerator>,
    write_lock: Mutex<()>,
}

impl LedgerService {
    pub fn new(store: Arc<dyn LedgerStore>, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            store,
            ids,
            write_lock: Mutex::new(()),
        }
    }

    /// Current ledger as stored
    pub async fn snapshot(&self) -> ServiceResult<Vec<CountryVisit>> {
        Ok(self.store.load().await?)
    }

    /// Record `request` and return the records that were added
    pub async fn add_visits(&self, request: &VisitRequest) -> ServiceResult<Vec<CountryVisit>> {
        let _guard = self.write_lock.lock().await;

        let current = self.store.load().await?;
        let planned = ledger::plan_visits(request, &current, self.ids.as_ref())?;

        let merged = ledger::merge_visits(&current, &planned);
        self.store.save(&merged).await?;

        info!(
            "Recorded {} day(s) in {} ({} visits total)",
            planned.len(),
            planned.first().map(|v| v.country_code.as_str()).unwrap_or_default(),
            merged.len()
        );
        Ok(planned)
    }

    /// Remove one record; returns false when no record had that id
    pub async fn remove_visit(&self, id: &VisitId) -> ServiceResult<bool> {
        let _guard = self.write_lock.lock().await;

        let current = self.store.load().await?;
        let remaining = ledger::remove_visit(&current, id);
        if remaining.len() == current.len() {
            return Ok(false);
        }

        self.store.save(&remaining).await?;
        info!("Removed visit {}", id);
        Ok(true)
    }
}
