use serde::{Deserialize, Serialize};

/// Aggregate performance over the whole trade set, computed by the store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsSummary {
    /// Every trade, open or closed
    pub total_trades: u64,

    /// Closed trades with positive P&L
    pub winning_trades: u64,

    /// Closed trades with negative P&L
    pub losing_trades: u64,

    /// Winning trades / closed trades, in [0, 1]
    pub winrate: f64,

    /// Sum of realized P&L over closed trades
    pub realized_pnl: f64,

    /// Mean P&L of winning trades; absent when there are none
    #[serde(default)]
    pub avg_win: Option<f64>,

    /// Mean loss of losing trades; absent when there are none.
    /// The in-memory store reports a positive magnitude while the HTTP API
    /// sends a negative mean; either sign is displayed as the store sent it.
    #[serde(default)]
    pub avg_loss: Option<f64>,
}
