use crate::application::ledger::TradeLedger;
use crate::domain::entities::trade::{RawTradeInput, Trade};
use crate::domain::error::DomainError;
use crate::domain::ports::id_generator::IdGenerator;
use std::sync::Arc;

/// Trades shown on the dashboard.
pub const RECENT_TRADES_LIMIT: usize = 5;

pub struct TradeUseCase {
    ledger: Arc<TradeLedger>,
    ids: Arc<dyn IdGenerator>,
}

impl TradeUseCase {
    pub fn new(ledger: Arc<TradeLedger>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { ledger, ids }
    }

    /// Normalize and journal a submission. Nothing is stored on error.
    pub fn add(&self, input: &RawTradeInput) -> Result<Trade, DomainError> {
        let trade = Trade::from_input(input, self.ids.next_id())?;
        self.ledger.prepend(trade.clone())?;
        log::info!(
            "Journaled {} {} {} ({} pips, {:.2}R)",
            trade.id,
            trade.direction,
            trade.pair,
            trade.pips,
            trade.r_multiple
        );
        Ok(trade)
    }

    pub fn delete(&self, id: &str) -> Result<(), DomainError> {
        if !self.ledger.remove(id) {
            return Err(DomainError::NotFound(format!("Trade not found: {id}")));
        }
        log::info!("Deleted trade {id}");
        Ok(())
    }

    /// Stored order, most recent first.
    pub fn list(&self, limit: Option<usize>) -> Vec<Trade> {
        let mut trades = self.ledger.snapshot();
        if let Some(limit) = limit {
            trades.truncate(limit);
        }
        trades
    }

    pub fn recent(&self) -> Vec<Trade> {
        self.list(Some(RECENT_TRADES_LIMIT))
    }
}
