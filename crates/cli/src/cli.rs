//! Command-line interface definitions.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use trading_journal_core::models::trade::Side;

/// Trading Journal - record trades and review realized performance.
#[derive(Parser, Debug)]
#[command(name = "journal")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file (defaults to ./journal.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print rows and cards as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all trades with their P&L
    List,

    /// Show one trade fetched from the store
    Show {
        /// Trade id
        id: i64,
    },

    /// Show the summary cards
    Stats,

    /// Record a new trade
    Add(AddArgs),

    /// Edit an existing trade (only the given fields change in the form)
    Edit(EditArgs),

    /// Delete a trade
    Delete {
        /// Trade id
        id: i64,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Check that the API answers
    Health,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum SideArg {
    Long,
    Short,
}

impl From<SideArg> for Side {
    fn from(side: SideArg) -> Self {
        match side {
            SideArg::Long => Side::Long,
            SideArg::Short => Side::Short,
        }
    }
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Ticker symbol (upper-cased automatically)
    #[arg(long)]
    pub symbol: String,

    #[arg(long, value_enum, default_value = "long")]
    pub side: SideArg,

    #[arg(long)]
    pub quantity: f64,

    #[arg(long)]
    pub entry_price: f64,

    /// Entry time as YYYY-MM-DDTHH:MM (defaults to now)
    #[arg(long)]
    pub entry_time: Option<String>,

    #[arg(long)]
    pub exit_price: Option<f64>,

    /// Exit time as YYYY-MM-DDTHH:MM
    #[arg(long)]
    pub exit_time: Option<String>,

    #[arg(long)]
    pub strategy: Option<String>,

    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Args, Debug)]
pub struct EditArgs {
    /// Trade id
    pub id: i64,

    #[arg(long)]
    pub symbol: Option<String>,

    #[arg(long, value_enum)]
    pub side: Option<SideArg>,

    #[arg(long)]
    pub quantity: Option<f64>,

    #[arg(long)]
    pub entry_price: Option<f64>,

    #[arg(long)]
    pub entry_time: Option<String>,

    #[arg(long, conflicts_with = "reopen")]
    pub exit_price: Option<f64>,

    #[arg(long, conflicts_with = "reopen")]
    pub exit_time: Option<String>,

    /// Clear the exit price and time, marking the trade open again
    #[arg(long)]
    pub reopen: bool,

    #[arg(long)]
    pub strategy: Option<String>,

    #[arg(long)]
    pub notes: Option<String>,
}
