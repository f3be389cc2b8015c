pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

use crate::application::analytics::{AnalyticsReport, AnalyticsUseCase, Dashboard};
use crate::application::ledger::TradeLedger;
use crate::application::trade::TradeUseCase;
use crate::domain::entities::trade::{RawTradeInput, Trade};
use crate::domain::error::DomainError;
use crate::domain::ports::id_generator::IdGenerator;
use crate::domain::ports::key_value_store::KeyValueStore;
use crate::domain::values::analytics::{AnalyticsSummary, RExtremes};
use crate::domain::values::pair_performance::PairPerformance;
use crate::infrastructure::file::kv_store::FileKeyValueStore;
use crate::infrastructure::ids::UuidGenerator;
use crate::infrastructure::memory::kv_store::MemoryKeyValueStore;
use crate::infrastructure::sqlite::kv_store::SqliteKeyValueStore;
use std::sync::Arc;

pub struct FxJournal {
    trade_uc: TradeUseCase,
    analytics_uc: AnalyticsUseCase,
}

impl FxJournal {
    /// Open the journal on `backend` (`sqlite`, `file` or `memory`).
    pub fn new(backend: &str, store_path: Option<&str>) -> Result<Self, DomainError> {
        let store: Arc<dyn KeyValueStore> = match backend {
            "memory" => Arc::new(MemoryKeyValueStore::new()),
            "file" => Arc::new(FileKeyValueStore::new(
                store_path.unwrap_or("./fxjournal-data"),
            )?),
            "sqlite" => Arc::new(SqliteKeyValueStore::open(
                store_path.unwrap_or("./fxjournal.db"),
            )?),
            other => {
                return Err(DomainError::InvalidInput(format!(
                    "Unknown store backend: {other} (expected sqlite, file or memory)"
                )))
            }
        };
        log::debug!("Using {backend} trade store");

        Ok(Self::with_ports(store, Arc::new(UuidGenerator)))
    }

    pub fn with_ports(store: Arc<dyn KeyValueStore>, ids: Arc<dyn IdGenerator>) -> Self {
        let ledger = Arc::new(TradeLedger::open(store));
        Self {
            trade_uc: TradeUseCase::new(ledger.clone(), ids),
            analytics_uc: AnalyticsUseCase::new(ledger),
        }
    }

    // Delegating methods
    pub fn add_trade(&self, input: &RawTradeInput) -> Result<Trade, DomainError> {
        self.trade_uc.add(input)
    }

    pub fn delete_trade(&self, id: &str) -> Result<(), DomainError> {
        self.trade_uc.delete(id)
    }

    pub fn trades(&self, limit: Option<usize>) -> Vec<Trade> {
        self.trade_uc.list(limit)
    }

    pub fn recent_trades(&self) -> Vec<Trade> {
        self.trade_uc.recent()
    }

    pub fn analytics(&self) -> AnalyticsSummary {
        self.analytics_uc.summary()
    }

    pub fn pair_breakdown(&self) -> Vec<PairPerformance> {
        self.analytics_uc.pair_breakdown()
    }

    pub fn r_extremes(&self) -> RExtremes {
        self.analytics_uc.r_extremes()
    }

    pub fn dashboard(&self) -> Dashboard {
        self.analytics_uc.dashboard()
    }

    pub fn analytics_report(&self) -> AnalyticsReport {
        self.analytics_uc.report()
    }
}
