pub mod config;
pub mod errors;
pub mod models;
pub mod prompt;
pub mod services;
pub mod store;

use models::{
    form::{FormState, TradeForm},
    stats::StatsSummary,
    trade::{Trade, TradeUpdate},
    view::{ActionOutcome, StatsCard, TradeRow, ViewState},
};
use prompt::UserPrompt;
use services::{presentation_service::PresentationService, reload_service::ReloadService};
use store::{http::HttpTradeStore, traits::TradeStore};
use tracing::{info, warn};

use config::JournalConfig;
use errors::JournalError;

pub const CREATE_FAILED: &str = "Failed to create trade";
pub const UPDATE_FAILED: &str = "Failed to update trade";
pub const DELETE_FAILED: &str = "Failed to delete trade";
pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this trade?";

/// Main entry point for the Trading Journal core library.
///
/// Owns the whole client state: the last loaded trades and summary, the view
/// state and the open form. The store stays the source of truth; every
/// successful mutation is followed by a full reload that replaces the held
/// data wholesale. All transitions take `&mut self`, so one caller drives
/// the journal at a time.
#[must_use]
pub struct TradingJournal {
    store: Box<dyn TradeStore>,
    /// Where the store lives, shown in the load-failure message.
    location: String,
    reload_service: ReloadService,
    presentation_service: PresentationService,
    view: ViewState,
    trades: Vec<Trade>,
    stats: Option<StatsSummary>,
    form: FormState,
}

impl std::fmt::Debug for TradingJournal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TradingJournal")
            .field("store", &self.store.name())
            .field("location", &self.location)
            .field("view", &self.view)
            .field("trades", &self.trades.len())
            .field("form", &self.form)
            .finish()
    }
}

impl TradingJournal {
    /// Journal over any store. `location` names the store in user messages.
    pub fn new(store: Box<dyn TradeStore>, location: impl Into<String>) -> Self {
        Self {
            store,
            location: location.into(),
            reload_service: ReloadService::new(),
            presentation_service: PresentationService::new(),
            view: ViewState::Loading,
            trades: Vec::new(),
            stats: None,
            form: FormState::Closed,
        }
    }

    /// Journal over the HTTP API described by `config`.
    pub fn from_config(config: &JournalConfig) -> Self {
        let store = HttpTradeStore::new(&config.api);
        let location = store.base_url().to_string();
        Self::new(Box::new(store), location)
    }

    // ── Loading ─────────────────────────────────────────────────────

    /// Reload trades and stats. Either failing puts the view in the failed
    /// state and drops the held data; there is no partial view.
    pub async fn load(&mut self) -> &ViewState {
        self.view = ViewState::Loading;
        match self.reload_service.load(self.store.as_ref()).await {
            Ok(snapshot) => {
                self.trades = snapshot.trades;
                self.stats = Some(snapshot.stats);
                self.view = ViewState::Ready;
            }
            Err(e) => {
                warn!(error = %e, "failed to load journal");
                self.trades.clear();
                self.stats = None;
                self.view = ViewState::Failed {
                    message: format!(
                        "Failed to load data. Make sure your API is running on {}",
                        self.location
                    ),
                };
            }
        }
        &self.view
    }

    /// The retry action of the failed view: a full load.
    pub async fn retry(&mut self) -> &ViewState {
        self.load().await
    }

    #[must_use]
    pub fn view_state(&self) -> &ViewState {
        &self.view
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.view == ViewState::Ready
    }

    // ── Data & Presentation ─────────────────────────────────────────

    /// Trades from the last successful load, ordered as the store sent them.
    #[must_use]
    pub fn trades(&self) -> &[Trade] {
        &self.trades
    }

    /// Summary from the last successful load.
    #[must_use]
    pub fn stats(&self) -> Option<&StatsSummary> {
        self.stats.as_ref()
    }

    /// A trade from the held list.
    #[must_use]
    pub fn trade(&self, id: i64) -> Option<&Trade> {
        self.trades.iter().find(|t| t.id == id)
    }

    /// Fetch one trade straight from the store, bypassing the held list.
    pub async fn fetch_trade(&self, id: i64) -> Result<Trade, JournalError> {
        self.store.get_trade(id).await
    }

    /// Check that the store answers.
    pub async fn check_health(&self) -> Result<(), JournalError> {
        self.store.health().await
    }

    /// Formatted table rows; empty unless the view is ready.
    #[must_use]
    pub fn trade_rows(&self) -> Vec<TradeRow> {
        if !self.is_ready() {
            return Vec::new();
        }
        self.presentation_service.trade_rows(&self.trades)
    }

    /// Summary cards; empty unless the view is ready.
    #[must_use]
    pub fn stats_cards(&self) -> Vec<StatsCard> {
        match (&self.view, &self.stats) {
            (ViewState::Ready, Some(stats)) => self.presentation_service.stats_cards(stats),
            _ => Vec::new(),
        }
    }

    // ── Form State Machine ──────────────────────────────────────────

    #[must_use]
    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// The open draft, for field edits.
    pub fn form_mut(&mut self) -> Option<&mut TradeForm> {
        self.form.draft_mut()
    }

    /// Open a blank create form, replacing any open form.
    pub fn open_create_form(&mut self) {
        self.open_create_form_with(TradeForm::blank());
    }

    /// Open the create form with a prepared draft.
    pub fn open_create_form_with(&mut self, draft: TradeForm) {
        self.form = FormState::Creating(draft);
    }

    /// Open the edit form pre-populated from a held trade.
    pub fn open_edit_form(&mut self, trade_id: i64) -> Result<(), JournalError> {
        let trade = self
            .trade(trade_id)
            .ok_or(JournalError::TradeNotFound(trade_id))?;
        self.form = FormState::Editing {
            trade_id,
            form: TradeForm::from_trade(trade),
        };
        Ok(())
    }

    /// Close the form without any request. The draft is discarded.
    pub fn cancel_form(&mut self) {
        self.form = FormState::Closed;
    }

    /// Submit the open form: create or update, then reload, then close.
    ///
    /// On failure the user is alerted, the form stays open with the draft
    /// intact, and no reload happens.
    pub async fn submit_form(&mut self, prompt: &dyn UserPrompt) -> ActionOutcome {
        let (editing, failure_message, payload) = match &self.form {
            FormState::Closed => return ActionOutcome::Ignored,
            FormState::Creating(form) => (None, CREATE_FAILED, form.to_create()),
            FormState::Editing { trade_id, form } => {
                (Some(*trade_id), UPDATE_FAILED, form.to_create())
            }
        };

        let payload = match payload {
            Ok(payload) => payload,
            Err(e) => {
                warn!(error = %e, "trade form rejected");
                prompt.alert(&format!("{failure_message}: {e}"));
                return ActionOutcome::Failed;
            }
        };

        let result = match editing {
            None => self.store.create_trade(&payload).await,
            Some(id) => {
                self.store
                    .update_trade(id, &TradeUpdate::from(payload))
                    .await
            }
        };

        match result {
            Ok(trade) => {
                info!(id = trade.id, symbol = %trade.symbol, "trade saved");
                self.load().await;
                self.form = FormState::Closed;
                ActionOutcome::Completed
            }
            Err(e) => {
                warn!(error = %e, "{failure_message}");
                prompt.alert(failure_message);
                ActionOutcome::Failed
            }
        }
    }

    /// Delete a trade after the user confirms, then reload.
    pub async fn delete_trade(&mut self, trade_id: i64, prompt: &dyn UserPrompt) -> ActionOutcome {
        if !prompt.confirm(DELETE_CONFIRMATION) {
            return ActionOutcome::Cancelled;
        }

        match self.store.delete_trade(trade_id).await {
            Ok(()) => {
                info!(id = trade_id, "trade deleted");
                self.load().await;
                ActionOutcome::Completed
            }
            Err(e) => {
                warn!(id = trade_id, error = %e, "{DELETE_FAILED}");
                prompt.alert(DELETE_FAILED);
                ActionOutcome::Failed
            }
        }
    }
}
