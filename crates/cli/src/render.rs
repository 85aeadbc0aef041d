//! Plain-text rendering of rows and cards.

use trading_journal_core::models::trade::Trade;
use trading_journal_core::models::view::{StatsCard, TradeRow, Trend};
use trading_journal_core::services::format::{format_currency, format_datetime, DASH};
use trading_journal_core::services::presentation_service::EMPTY_JOURNAL_MESSAGE;

const HEADERS: [&str; 9] = [
    "ID", "SYMBOL", "SIDE", "QTY", "ENTRY", "EXIT", "P&L", "ENTRY TIME", "STRATEGY",
];
// Numeric columns are right-aligned.
const RIGHT_ALIGNED: [bool; 9] = [true, false, false, true, true, true, true, false, false];

pub fn trade_table(rows: &[TradeRow]) -> String {
    if rows.is_empty() {
        return format!("{EMPTY_JOURNAL_MESSAGE}\n");
    }

    let cells: Vec<[String; 9]> = rows
        .iter()
        .map(|r| {
            [
                r.id.to_string(),
                r.symbol.clone(),
                r.side_label.clone(),
                r.quantity.clone(),
                r.entry_price.clone(),
                r.exit_price.clone(),
                format!("{}{}", r.pnl, trend_marker(r.pnl_trend)),
                r.entry_time.clone(),
                r.strategy.clone(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &cells {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    out.push_str(&line(&HEADERS.map(String::from), &widths));
    for row in &cells {
        out.push_str(&line(row, &widths));
    }
    out
}

pub fn stats_cards(cards: &[StatsCard]) -> String {
    let width = cards.iter().map(|c| c.label.chars().count()).max().unwrap_or(0);
    cards
        .iter()
        .map(|c| format!("{:<width$}  {}{}\n", c.label, c.value, trend_marker(c.trend)))
        .collect()
}

pub fn trade_detail(trade: &Trade) -> String {
    let pnl = trade.pnl().map(format_currency).unwrap_or_else(|| "Open".into());
    let fields = [
        ("Id", trade.id.to_string()),
        ("Symbol", trade.symbol.clone()),
        ("Side", trade.side.to_string().to_uppercase()),
        ("Quantity", trade.quantity.to_string()),
        ("Entry price", format_currency(trade.entry_price)),
        ("Exit price", trade.exit_price.map(format_currency).unwrap_or_else(|| DASH.into())),
        ("P&L", pnl),
        ("Entry time", format_datetime(&trade.entry_time)),
        ("Exit time", trade.exit_time.as_ref().map(format_datetime).unwrap_or_else(|| DASH.into())),
        ("Strategy", trade.strategy_tag.clone().unwrap_or_else(|| DASH.into())),
        ("Notes", trade.notes.clone().unwrap_or_else(|| DASH.into())),
    ];
    fields
        .iter()
        .map(|(label, value)| format!("{label:<12} {value}\n"))
        .collect()
}

fn line(cells: &[String; 9], widths: &[usize; 9]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths.iter())
        .zip(RIGHT_ALIGNED.iter())
        .map(|((cell, &w), &right)| {
            if right {
                format!("{cell:>w$}")
            } else {
                format!("{cell:<w$}")
            }
        })
        .collect();
    format!("{}\n", padded.join("  ").trim_end())
}

fn trend_marker(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => " ↑",
        Trend::Down => " ↓",
        Trend::Neutral => "",
    }
}
