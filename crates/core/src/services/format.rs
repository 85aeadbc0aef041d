//! Display formatting for money, percentages and dates (en-US conventions).

use chrono::NaiveDateTime;

use crate::models::stats::StatsSummary;

/// Placeholder for a value that does not exist (open exit price, no tag...).
pub const DASH: &str = "—";

/// US dollars with two decimals and thousands separators: `$1,234.50`,
/// `-$40.00`. Amounts that round to zero print without a sign.
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let digits = format!("{:.2}", value.abs());
    let (whole, cents) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));
    let sign = if value < 0.0 && digits != "0.00" { "-" } else { "" };
    format!("{sign}${}.{cents}", group_thousands(whole))
}

/// Fraction as a percentage with one decimal: `0.5` → `50.0%`.
pub fn format_percent(value: f64) -> String {
    if !value.is_finite() {
        return "0.0%".to_string();
    }
    format!("{:.1}%", value * 100.0)
}

/// Win rate of a summary. An empty journal shows `0.0%` whatever the
/// store sent.
pub fn format_winrate(stats: &StatsSummary) -> String {
    if stats.total_trades == 0 {
        return format_percent(0.0);
    }
    format_percent(stats.winrate)
}

/// `Jan 1, 2024, 09:30 AM`
pub fn format_datetime(value: &NaiveDateTime) -> String {
    value.format("%b %-d, %Y, %I:%M %p").to_string()
}

/// Quantities print without trailing zeros: `10`, `0.5`.
pub fn format_quantity(value: f64) -> String {
    value.to_string()
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
