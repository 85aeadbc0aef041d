use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::BTreeMap;

use super::traits::TradeStore;
use crate::errors::JournalError;
use crate::models::stats::StatsSummary;
use crate::models::trade::{Trade, TradeCreate, TradeUpdate};
use crate::services::stats_service::StatsService;

const NAME: &str = "In-memory";

/// Trade store held entirely in process memory.
///
/// Implements the same contract as the API: ids are assigned sequentially
/// from 1, values are stored exactly as submitted (no symbol normalization),
/// and the summary is aggregated with [`StatsService`].
pub struct InMemoryTradeStore {
    state: Mutex<MemoryState>,
    stats_service: StatsService,
}

struct MemoryState {
    next_id: i64,
    trades: BTreeMap<i64, Trade>,
}

impl InMemoryTradeStore {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(MemoryState {
                next_id: 1,
                trades: BTreeMap::new(),
            }),
            stats_service: StatsService::new(),
        }
    }

    /// Store seeded with existing trades; new ids continue after the highest one.
    pub fn with_trades(trades: Vec<Trade>) -> Self {
        let next_id = trades.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        let trades = trades.into_iter().map(|t| (t.id, t)).collect();
        Self {
            state: Mutex::new(MemoryState { next_id, trades }),
            stats_service: StatsService::new(),
        }
    }
}

impl Default for InMemoryTradeStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl TradeStore for InMemoryTradeStore {
    fn name(&self) -> &str {
        NAME
    }

    async fn list_trades(&self) -> Result<Vec<Trade>, JournalError> {
        let mut trades: Vec<Trade> = self.state.lock().trades.values().cloned().collect();
        // Stable on ties: BTreeMap already yields id order.
        trades.sort_by_key(|t| t.entry_time);
        Ok(trades)
    }

    async fn get_trade(&self, id: i64) -> Result<Trade, JournalError> {
        self.state
            .lock()
            .trades
            .get(&id)
            .cloned()
            .ok_or(JournalError::TradeNotFound(id))
    }

    async fn create_trade(&self, trade: &TradeCreate) -> Result<Trade, JournalError> {
        let mut state = self.state.lock();
        let id = state.next_id;
        state.next_id += 1;
        let stored = Trade::from_create(id, trade.clone());
        state.trades.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update_trade(&self, id: i64, update: &TradeUpdate) -> Result<Trade, JournalError> {
        let mut state = self.state.lock();
        let trade = state
            .trades
            .get_mut(&id)
            .ok_or(JournalError::TradeNotFound(id))?;
        trade.apply_update(update);
        Ok(trade.clone())
    }

    async fn delete_trade(&self, id: i64) -> Result<(), JournalError> {
        self.state
            .lock()
            .trades
            .remove(&id)
            .map(|_| ())
            .ok_or(JournalError::TradeNotFound(id))
    }

    async fn stats_summary(&self) -> Result<StatsSummary, JournalError> {
        let trades: Vec<Trade> = self.state.lock().trades.values().cloned().collect();
        Ok(self.stats_service.summarize(&trades))
    }

    async fn health(&self) -> Result<(), JournalError> {
        Ok(())
    }
}
