use chrono::{Local, NaiveDateTime, Timelike};

use super::timestamp;
use super::trade::{Side, Trade, TradeCreate};
use crate::errors::JournalError;

/// Which trade form, if any, is currently open. Only one at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FormState {
    #[default]
    Closed,
    /// Blank form; submission creates a trade
    Creating(TradeForm),
    /// Pre-populated form; submission updates `trade_id`
    Editing { trade_id: i64, form: TradeForm },
}

impl FormState {
    pub fn is_open(&self) -> bool {
        !matches!(self, FormState::Closed)
    }

    /// Id of the trade being edited, if the edit form is open.
    pub fn editing_id(&self) -> Option<i64> {
        match self {
            FormState::Editing { trade_id, .. } => Some(*trade_id),
            _ => None,
        }
    }

    pub fn draft(&self) -> Option<&TradeForm> {
        match self {
            FormState::Closed => None,
            FormState::Creating(form) | FormState::Editing { form, .. } => Some(form),
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut TradeForm> {
        match self {
            FormState::Closed => None,
            FormState::Creating(form) | FormState::Editing { form, .. } => Some(form),
        }
    }
}

/// Editable draft of a trade, mirroring the create schema.
///
/// Timestamps are held as minute-precision text (`YYYY-MM-DDTHH:MM`) the way
/// a user edits them, and are only parsed on [`TradeForm::to_create`].
#[derive(Debug, Clone, PartialEq)]
pub struct TradeForm {
    symbol: String,
    side: Side,
    quantity: f64,
    entry_price: f64,
    exit_price: Option<f64>,
    entry_time: String,
    exit_time: Option<String>,
    strategy_tag: Option<String>,
    notes: Option<String>,
}

impl TradeForm {
    /// Blank draft with the entry time set to the current local minute.
    pub fn blank() -> Self {
        Self::blank_at(Local::now().naive_local())
    }

    /// Blank draft with the entry time set to `now`.
    pub fn blank_at(now: NaiveDateTime) -> Self {
        let now = now.with_second(0).and_then(|t| t.with_nanosecond(0)).unwrap_or(now);
        Self {
            symbol: String::new(),
            side: Side::Long,
            quantity: 0.0,
            entry_price: 0.0,
            exit_price: None,
            entry_time: timestamp::to_form_text(&now),
            exit_time: None,
            strategy_tag: None,
            notes: None,
        }
    }

    /// Draft pre-populated from an existing trade.
    pub fn from_trade(trade: &Trade) -> Self {
        Self {
            symbol: trade.symbol.clone(),
            side: trade.side,
            quantity: trade.quantity,
            entry_price: trade.entry_price,
            exit_price: trade.exit_price,
            entry_time: timestamp::to_form_text(&trade.entry_time),
            exit_time: trade.exit_time.as_ref().map(timestamp::to_form_text),
            strategy_tag: trade.strategy_tag.clone(),
            notes: trade.notes.clone(),
        }
    }

    // ── Field access ────────────────────────────────────────────────

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    pub fn entry_price(&self) -> f64 {
        self.entry_price
    }

    pub fn exit_price(&self) -> Option<f64> {
        self.exit_price
    }

    /// Entry time as displayed, at minute precision.
    pub fn entry_time(&self) -> &str {
        timestamp::truncate_to_minute(&self.entry_time)
    }

    /// Exit time as displayed, at minute precision.
    pub fn exit_time(&self) -> Option<&str> {
        self.exit_time.as_deref().map(timestamp::truncate_to_minute)
    }

    pub fn strategy_tag(&self) -> Option<&str> {
        self.strategy_tag.as_deref()
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    // ── Field updates ───────────────────────────────────────────────

    /// Symbols are upper-cased as they are typed.
    pub fn set_symbol(&mut self, symbol: impl Into<String>) {
        self.symbol = symbol.into().to_uppercase();
    }

    pub fn set_side(&mut self, side: Side) {
        self.side = side;
    }

    pub fn set_quantity(&mut self, quantity: f64) {
        self.quantity = quantity;
    }

    pub fn set_entry_price(&mut self, entry_price: f64) {
        self.entry_price = entry_price;
    }

    pub fn set_exit_price(&mut self, exit_price: Option<f64>) {
        self.exit_price = exit_price;
    }

    pub fn set_entry_time(&mut self, entry_time: impl Into<String>) {
        self.entry_time = entry_time.into();
    }

    pub fn set_exit_time(&mut self, exit_time: Option<String>) {
        self.exit_time = non_empty(exit_time);
    }

    pub fn set_strategy_tag(&mut self, strategy_tag: Option<String>) {
        self.strategy_tag = non_empty(strategy_tag);
    }

    pub fn set_notes(&mut self, notes: Option<String>) {
        self.notes = non_empty(notes);
    }

    // ── Submission ──────────────────────────────────────────────────

    /// Validate the draft and build the request body.
    pub fn to_create(&self) -> Result<TradeCreate, JournalError> {
        let symbol = self.symbol.trim().to_uppercase();
        if symbol.is_empty() {
            return Err(JournalError::ValidationError("Symbol is required".into()));
        }
        if !self.quantity.is_finite() || self.quantity < 0.0 {
            return Err(JournalError::ValidationError(format!(
                "Quantity must be a non-negative number, got {}",
                self.quantity
            )));
        }
        if !self.entry_price.is_finite() {
            return Err(JournalError::ValidationError(
                "Entry price must be a number".into(),
            ));
        }
        if let Some(exit) = self.exit_price {
            if !exit.is_finite() {
                return Err(JournalError::ValidationError(
                    "Exit price must be a number".into(),
                ));
            }
        }

        let entry_time = timestamp::parse(&self.entry_time).ok_or_else(|| {
            JournalError::ValidationError(format!("Invalid entry time '{}'", self.entry_time))
        })?;
        let exit_time = match &self.exit_time {
            Some(text) => Some(timestamp::parse(text).ok_or_else(|| {
                JournalError::ValidationError(format!("Invalid exit time '{text}'"))
            })?),
            None => None,
        };

        Ok(TradeCreate {
            symbol,
            side: self.side,
            quantity: self.quantity,
            entry_price: self.entry_price,
            exit_price: self.exit_price,
            entry_time,
            exit_time,
            strategy_tag: self.strategy_tag.clone(),
            notes: self.notes.clone(),
        })
    }
}

impl Default for TradeForm {
    fn default() -> Self {
        Self::blank()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
