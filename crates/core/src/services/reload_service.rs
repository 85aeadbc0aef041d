use tracing::{debug, warn};

use crate::errors::JournalError;
use crate::models::view::Snapshot;
use crate::store::traits::TradeStore;

/// Fetches everything the journal displays, as one all-or-nothing unit.
///
/// The trade list and the summary are requested concurrently and both must
/// succeed. The two responses are not guaranteed to describe the same
/// instant of the store.
pub struct ReloadService;

impl ReloadService {
    pub fn new() -> Self {
        Self
    }

    pub async fn load(&self, store: &dyn TradeStore) -> Result<Snapshot, JournalError> {
        debug!(store = store.name(), "reloading trades and stats");

        let (trades, stats) = futures::try_join!(store.list_trades(), store.stats_summary())
            .inspect_err(|e| warn!(store = store.name(), error = %e, "reload failed"))?;

        debug!(trades = trades.len(), "reload complete");
        Ok(Snapshot { trades, stats })
    }
}

impl Default for ReloadService {
    fn default() -> Self {
        Self::new()
    }
}
