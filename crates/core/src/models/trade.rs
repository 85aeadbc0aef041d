use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

use super::timestamp;
use crate::errors::JournalError;

/// Direction of a position.
///
/// Read leniently: the store keeps the side as free text, so `"LONG"` or
/// `" short "` still load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Profits when the price rises
    #[default]
    Long,
    /// Profits when the price falls
    Short,
}

impl Side {
    /// Sign applied to the price move: +1 for long, -1 for short.
    pub fn direction(self) -> f64 {
        match self {
            Side::Long => 1.0,
            Side::Short => -1.0,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Long => write!(f, "long"),
            Side::Short => write!(f, "short"),
        }
    }
}

impl std::str::FromStr for Side {
    type Err = JournalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "long" => Ok(Side::Long),
            "short" => Ok(Side::Short),
            other => Err(JournalError::ValidationError(format!(
                "Unknown side '{other}': expected 'long' or 'short'"
            ))),
        }
    }
}

impl<'de> Deserialize<'de> for Side {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// Realized profit or loss of a round trip.
///
/// Agnostic to the sign of the prices; callers validate their inputs.
pub fn realized_pnl(side: Side, entry_price: f64, exit_price: f64, quantity: f64) -> f64 {
    (exit_price - entry_price) * quantity * side.direction()
}

/// A single journal entry as returned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    /// Assigned by the store, immutable
    pub id: i64,

    pub symbol: String,

    pub side: Side,

    pub quantity: f64,

    pub entry_price: f64,

    /// Absent while the position is still open
    #[serde(default)]
    pub exit_price: Option<f64>,

    #[serde(with = "timestamp")]
    pub entry_time: NaiveDateTime,

    /// Not tied to `exit_price`: either may be set without the other
    #[serde(default, with = "timestamp::option")]
    pub exit_time: Option<NaiveDateTime>,

    #[serde(default)]
    pub strategy_tag: Option<String>,

    #[serde(default)]
    pub notes: Option<String>,
}

impl Trade {
    /// Build a stored trade from a create request.
    pub fn from_create(id: i64, create: TradeCreate) -> Self {
        Self {
            id,
            symbol: create.symbol,
            side: create.side,
            quantity: create.quantity,
            entry_price: create.entry_price,
            exit_price: create.exit_price,
            entry_time: create.entry_time,
            exit_time: create.exit_time,
            strategy_tag: create.strategy_tag,
            notes: create.notes,
        }
    }

    /// A trade is closed if and only if it has an exit price.
    pub fn is_closed(&self) -> bool {
        self.exit_price.is_some()
    }

    /// Realized P&L, or `None` while the trade is open.
    pub fn pnl(&self) -> Option<f64> {
        self.exit_price
            .map(|exit| realized_pnl(self.side, self.entry_price, exit, self.quantity))
    }

    /// Apply the fields present in `update`, leaving the rest untouched.
    pub fn apply_update(&mut self, update: &TradeUpdate) {
        if let Some(symbol) = &update.symbol {
            self.symbol = symbol.clone();
        }
        if let Some(side) = update.side {
            self.side = side;
        }
        if let Some(quantity) = update.quantity {
            self.quantity = quantity;
        }
        if let Some(entry_price) = update.entry_price {
            self.entry_price = entry_price;
        }
        if let Some(exit_price) = update.exit_price {
            self.exit_price = exit_price;
        }
        if let Some(entry_time) = update.entry_time {
            self.entry_time = entry_time;
        }
        if let Some(exit_time) = update.exit_time {
            self.exit_time = exit_time;
        }
        if let Some(strategy_tag) = &update.strategy_tag {
            self.strategy_tag = strategy_tag.clone();
        }
        if let Some(notes) = &update.notes {
            self.notes = notes.clone();
        }
    }
}

/// Request body for creating a trade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeCreate {
    pub symbol: String,
    pub side: Side,
    pub quantity: f64,
    pub entry_price: f64,
    #[serde(default)]
    pub exit_price: Option<f64>,
    #[serde(with = "timestamp")]
    pub entry_time: NaiveDateTime,
    #[serde(default, with = "timestamp::option")]
    pub exit_time: Option<NaiveDateTime>,
    #[serde(default)]
    pub strategy_tag: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Request body for a partial update.
///
/// `None` leaves a field out of the request. For nullable fields,
/// `Some(None)` is sent as `null` and clears the stored value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TradeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<Side>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_price: Option<Option<f64>>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "timestamp::option::serialize"
    )]
    pub entry_time: Option<NaiveDateTime>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "timestamp::patch::serialize"
    )]
    pub exit_time: Option<Option<NaiveDateTime>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy_tag: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Option<String>>,
}

/// A full create payload used as an update replaces every field,
/// explicitly clearing the optional ones it leaves empty.
impl From<TradeCreate> for TradeUpdate {
    fn from(create: TradeCreate) -> Self {
        Self {
            symbol: Some(create.symbol),
            side: Some(create.side),
            quantity: Some(create.quantity),
            entry_price: Some(create.entry_price),
            exit_price: Some(create.exit_price),
            entry_time: Some(create.entry_time),
            exit_time: Some(create.exit_time),
            strategy_tag: Some(create.strategy_tag),
            notes: Some(create.notes),
        }
    }
}
