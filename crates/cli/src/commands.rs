//! Command handlers. Each one drives the journal and reports the outcome.

use serde_json::{json, to_string_pretty};
use std::process::ExitCode;
use tracing::warn;
use trading_journal_core::models::form::TradeForm;
use trading_journal_core::models::view::{ActionOutcome, ViewState};
use trading_journal_core::TradingJournal;

use crate::cli::{AddArgs, Commands, EditArgs};
use crate::prompt::TerminalPrompt;
use crate::render;

pub async fn run(journal: &mut TradingJournal, command: Commands, json: bool) -> ExitCode {
    match command {
        Commands::List => list(journal, json).await,
        Commands::Stats => stats(journal, json).await,
        Commands::Show { id } => show(journal, id, json).await,
        Commands::Add(args) => add(journal, args, json).await,
        Commands::Edit(args) => edit(journal, args, json).await,
        Commands::Delete { id, yes } => delete(journal, id, yes, json).await,
        Commands::Health => health(journal).await,
    }
}

async fn list(journal: &mut TradingJournal, json: bool) -> ExitCode {
    if !load(journal).await {
        return ExitCode::FAILURE;
    }
    print_trades(journal, json)
}

async fn stats(journal: &mut TradingJournal, json: bool) -> ExitCode {
    if !load(journal).await {
        return ExitCode::FAILURE;
    }
    let cards = journal.stats_cards();
    if json {
        return print_json(&cards);
    }
    print!("{}", render::stats_cards(&cards));
    ExitCode::SUCCESS
}

async fn show(journal: &TradingJournal, id: i64, json: bool) -> ExitCode {
    match journal.fetch_trade(id).await {
        Ok(trade) if json => print_json(&trade),
        Ok(trade) => {
            print!("{}", render::trade_detail(&trade));
            ExitCode::SUCCESS
        }
        Err(e) => {
            warn!(id, error = %e, "failed to fetch trade");
            eprintln!("error: Failed to fetch trade");
            ExitCode::FAILURE
        }
    }
}

async fn add(journal: &mut TradingJournal, args: AddArgs, json: bool) -> ExitCode {
    let mut draft = TradeForm::blank();
    draft.set_symbol(args.symbol);
    draft.set_side(args.side.into());
    draft.set_quantity(args.quantity);
    draft.set_entry_price(args.entry_price);
    if let Some(entry_time) = args.entry_time {
        draft.set_entry_time(entry_time);
    }
    draft.set_exit_price(args.exit_price);
    draft.set_exit_time(args.exit_time);
    draft.set_strategy_tag(args.strategy);
    draft.set_notes(args.notes);
    journal.open_create_form_with(draft);

    let outcome = journal.submit_form(&TerminalPrompt::new(true)).await;
    after_mutation(journal, outcome, json)
}

async fn edit(journal: &mut TradingJournal, args: EditArgs, json: bool) -> ExitCode {
    // The edit form is populated from the loaded list.
    if !load(journal).await {
        return ExitCode::FAILURE;
    }
    if let Err(e) = journal.open_edit_form(args.id) {
        eprintln!("error: {e}");
        return ExitCode::FAILURE;
    }
    let Some(draft) = journal.form_mut() else {
        return ExitCode::FAILURE;
    };

    if let Some(symbol) = args.symbol {
        draft.set_symbol(symbol);
    }
    if let Some(side) = args.side {
        draft.set_side(side.into());
    }
    if let Some(quantity) = args.quantity {
        draft.set_quantity(quantity);
    }
    if let Some(entry_price) = args.entry_price {
        draft.set_entry_price(entry_price);
    }
    if let Some(entry_time) = args.entry_time {
        draft.set_entry_time(entry_time);
    }
    if args.reopen {
        draft.set_exit_price(None);
        draft.set_exit_time(None);
    }
    if let Some(exit_price) = args.exit_price {
        draft.set_exit_price(Some(exit_price));
    }
    if let Some(exit_time) = args.exit_time {
        draft.set_exit_time(Some(exit_time));
    }
    if let Some(strategy) = args.strategy {
        draft.set_strategy_tag(Some(strategy));
    }
    if let Some(notes) = args.notes {
        draft.set_notes(Some(notes));
    }

    let outcome = journal.submit_form(&TerminalPrompt::new(true)).await;
    after_mutation(journal, outcome, json)
}

async fn delete(journal: &mut TradingJournal, id: i64, yes: bool, json: bool) -> ExitCode {
    let outcome = journal.delete_trade(id, &TerminalPrompt::new(yes)).await;
    after_mutation(journal, outcome, json)
}

async fn health(journal: &TradingJournal) -> ExitCode {
    match journal.check_health().await {
        Ok(()) => {
            println!("ok");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

// ── Helpers ─────────────────────────────────────────────────────────

/// Load and report a failure. Returns `true` when the view is ready.
async fn load(journal: &mut TradingJournal) -> bool {
    match journal.load().await {
        ViewState::Ready => true,
        ViewState::Failed { message } => {
            eprintln!("error: {message}");
            false
        }
        ViewState::Loading => false,
    }
}

fn after_mutation(journal: &TradingJournal, outcome: ActionOutcome, json: bool) -> ExitCode {
    match outcome {
        ActionOutcome::Completed => match journal.view_state() {
            ViewState::Failed { message } => {
                eprintln!("error: {message}");
                ExitCode::FAILURE
            }
            _ => print_trades(journal, json),
        },
        ActionOutcome::Cancelled if json => print_json(&json!({ "outcome": outcome })),
        ActionOutcome::Cancelled => {
            println!("Cancelled");
            ExitCode::SUCCESS
        }
        ActionOutcome::Failed | ActionOutcome::Ignored => ExitCode::FAILURE,
    }
}

fn print_trades(journal: &TradingJournal, json: bool) -> ExitCode {
    let rows = journal.trade_rows();
    if json {
        return print_json(&rows);
    }
    print!("{}", render::trade_table(&rows));
    ExitCode::SUCCESS
}

fn print_json<T: serde::Serialize>(value: &T) -> ExitCode {
    match to_string_pretty(value) {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
