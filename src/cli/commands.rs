use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "fxjournal", about = "Personal forex trading journal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Headline stats and the most recent trades
    Dashboard,
    /// Journal a new trade
    Add {
        /// JSON with date, pair, direction, entry, stop, exit, pipValue, notes
        json: String,
    },
    /// List journaled trades, most recent first
    History {
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Delete a trade by id
    Delete { id: String },
    /// Win/loss, best and worst R, equity curve and per-pair P&L
    Analytics,
}
