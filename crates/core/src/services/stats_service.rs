use crate::models::stats::StatsSummary;
use crate::models::trade::Trade;

/// Aggregates realized performance over a set of trades.
///
/// Classification of closed trades:
/// - P&L > 0 is a win, P&L < 0 is a loss.
/// - P&L == 0 is neither, but still counts as a closed trade, so it
///   lowers the win rate.
///
/// Open trades count towards `total_trades` only.
///
/// Pure business logic, no I/O.
pub struct StatsService;

impl StatsService {
    pub fn new() -> Self {
        Self
    }

    pub fn summarize(&self, trades: &[Trade]) -> StatsSummary {
        let mut closed = 0u64;
        let mut realized_pnl = 0.0;
        let mut wins = Vec::new();
        let mut losses = Vec::new();

        for pnl in trades.iter().filter_map(Trade::pnl) {
            closed += 1;
            realized_pnl += pnl;
            if pnl > 0.0 {
                wins.push(pnl);
            } else if pnl < 0.0 {
                losses.push(-pnl);
            }
        }

        let winrate = if closed > 0 {
            wins.len() as f64 / closed as f64
        } else {
            0.0
        };

        StatsSummary {
            total_trades: trades.len() as u64,
            winning_trades: wins.len() as u64,
            losing_trades: losses.len() as u64,
            winrate,
            realized_pnl,
            avg_win: mean(&wins),
            avg_loss: mean(&losses),
        }
    }
}

impl Default for StatsService {
    fn default() -> Self {
        Self::new()
    }
}

/// `None` for an empty slice.
fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}
