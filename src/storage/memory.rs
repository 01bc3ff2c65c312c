use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

use super::trait_def::LedgerStore;
use crate::models::CountryVisit;

/// Ledger kept in process memory
#[derive(Default)]
pub struct MemoryStore {
    visits: RwLock<Vec<CountryVisit>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_visits(visits: Vec<CountryVisit>) -> Self {
        Self {
            visits: RwLock::new(visits),
        }
    }
}

#[async_trait]
impl LedgerStore for MemoryStore {
    async fn load(&self) -> Result<Vec<CountryVisit>> {
        Ok(self.visits.read().await.clone())
    }

    async fn save(&self, visits: &[CountryVisit]) -> Result<()> {
        *self.visits.write().await = visits.to_vec();
        Ok(())
    }
}
