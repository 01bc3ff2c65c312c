use crate::models::CountryVisit;
use anyhow::Result;
use async_trait::async_trait;

/// Where the caller keeps its ledger between runs
#[async_trait]
pub trait LedgerStore: Send + Sync {
    /// Load the full ledger; a store that was never written loads as empty
    async fn load(&self) -> Result<Vec<CountryVisit>>;

    /// Replace the stored ledger with `visits`
    async fn save(&self, visits: &[CountryVisit]) -> Result<()>;
}
