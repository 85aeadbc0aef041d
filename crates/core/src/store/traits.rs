use async_trait::async_trait;

use crate::errors::JournalError;
use crate::models::stats::StatsSummary;
use crate::models::trade::{Trade, TradeCreate, TradeUpdate};

/// Contract of the trade store that owns persistence and aggregation.
///
/// The HTTP API is one implementation; the in-memory store implements the
/// same contract for offline use and tests. The journal only ever talks to
/// this trait.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait TradeStore: Send + Sync {
    /// Human-readable name of this store (for logs/errors).
    fn name(&self) -> &str;

    /// All trades, ordered by entry time.
    async fn list_trades(&self) -> Result<Vec<Trade>, JournalError>;

    /// A single trade by id.
    async fn get_trade(&self, id: i64) -> Result<Trade, JournalError>;

    /// Persist a new trade; the store assigns the id.
    async fn create_trade(&self, trade: &TradeCreate) -> Result<Trade, JournalError>;

    /// Apply a partial update and return the stored result.
    async fn update_trade(&self, id: i64, update: &TradeUpdate) -> Result<Trade, JournalError>;

    async fn delete_trade(&self, id: i64) -> Result<(), JournalError>;

    /// Aggregate statistics over every stored trade.
    async fn stats_summary(&self) -> Result<StatsSummary, JournalError>;

    /// Liveness check.
    async fn health(&self) -> Result<(), JournalError>;
}
