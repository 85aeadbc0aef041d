use serde::Serialize;

use super::stats::StatsSummary;
use super::trade::{Side, Trade};

/// What the journal view is currently showing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    /// A full reload is in flight (also the state before the first load)
    #[default]
    Loading,
    /// Trades and stats are both available
    Ready,
    /// The last reload failed; nothing else is shown until a retry succeeds
    Failed { message: String },
}

/// Result of a full reload: both halves or nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub trades: Vec<Trade>,
    pub stats: StatsSummary,
}

/// Result of a user action on the journal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionOutcome {
    /// The request succeeded and a reload was issued
    Completed,
    /// The request (or client-side validation) failed; the user was notified
    Failed,
    /// The user declined the confirmation; nothing was sent
    Cancelled,
    /// Nothing to act on (e.g. submitting with no form open)
    Ignored,
}

/// Color hint for a displayed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

impl Trend {
    /// Up for positive, down for negative, neutral for zero.
    pub fn of_signed(value: f64) -> Self {
        if value > 0.0 {
            Trend::Up
        } else if value < 0.0 {
            Trend::Down
        } else {
            Trend::Neutral
        }
    }
}

/// One summary card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsCard {
    pub label: String,
    pub value: String,
    pub trend: Trend,
}

/// One row of the trade table, already formatted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TradeRow {
    pub id: i64,
    pub symbol: String,
    pub side: Side,
    /// Upper-cased side label (`LONG` / `SHORT`)
    pub side_label: String,
    pub quantity: String,
    pub entry_price: String,
    /// Exit price, or a dash while open
    pub exit_price: String,
    /// Formatted P&L, or `Open`
    pub pnl: String,
    pub pnl_trend: Trend,
    pub entry_time: String,
    /// Strategy tag, or a dash
    pub strategy: String,
}
