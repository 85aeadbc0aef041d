use crate::models::stats::StatsSummary;
use crate::models::trade::Trade;
use crate::models::view::{StatsCard, TradeRow, Trend};
use crate::services::format::{
    format_currency, format_datetime, format_quantity, format_winrate, DASH,
};

/// Shown in place of the table when the journal has no trades.
pub const EMPTY_JOURNAL_MESSAGE: &str = "No trades yet. Create your first trade to get started!";

/// Turns trades and the summary into display-ready rows and cards.
///
/// The only computation done here is the per-row P&L; every aggregate
/// comes from the store's summary as-is.
pub struct PresentationService;

impl PresentationService {
    pub fn new() -> Self {
        Self
    }

    pub fn trade_row(&self, trade: &Trade) -> TradeRow {
        let pnl = trade.pnl();
        TradeRow {
            id: trade.id,
            symbol: trade.symbol.clone(),
            side: trade.side,
            side_label: trade.side.to_string().to_uppercase(),
            quantity: format_quantity(trade.quantity),
            entry_price: format_currency(trade.entry_price),
            exit_price: trade
                .exit_price
                .map(format_currency)
                .unwrap_or_else(|| DASH.to_string()),
            pnl: pnl.map(format_currency).unwrap_or_else(|| "Open".to_string()),
            pnl_trend: pnl.map(Trend::of_signed).unwrap_or(Trend::Neutral),
            entry_time: format_datetime(&trade.entry_time),
            strategy: trade
                .strategy_tag
                .clone()
                .filter(|tag| !tag.is_empty())
                .unwrap_or_else(|| DASH.to_string()),
        }
    }

    pub fn trade_rows(&self, trades: &[Trade]) -> Vec<TradeRow> {
        trades.iter().map(|t| self.trade_row(t)).collect()
    }

    /// The four summary cards, in display order.
    pub fn stats_cards(&self, stats: &StatsSummary) -> Vec<StatsCard> {
        let winrate_trend = if stats.total_trades > 0 && stats.winrate >= 0.5 {
            Trend::Up
        } else {
            Trend::Down
        };

        // Both averages are needed for the card to mean anything.
        let averages = match (stats.avg_win, stats.avg_loss) {
            (Some(win), Some(loss)) => {
                format!("{} / {}", format_currency(win), format_currency(loss))
            }
            _ => DASH.to_string(),
        };

        vec![
            StatsCard {
                label: "Total Trades".into(),
                value: stats.total_trades.to_string(),
                trend: Trend::Neutral,
            },
            StatsCard {
                label: "Win Rate".into(),
                value: format_winrate(stats),
                trend: winrate_trend,
            },
            StatsCard {
                label: "Realized P&L".into(),
                value: format_currency(stats.realized_pnl),
                trend: Trend::of_signed(stats.realized_pnl),
            },
            StatsCard {
                label: "Avg Win / Avg Loss".into(),
                value: averages,
                trend: Trend::Neutral,
            },
        ]
    }
}

impl Default for PresentationService {
    fn default() -> Self {
        Self::new()
    }
}
